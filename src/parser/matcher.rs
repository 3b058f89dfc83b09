use super::constraint::Position;
use crate::word_char::WordChar;

/// Full-length positional match: `word` must have exactly one character per
/// position, each literal must be equal, each wildcard takes any character.
///
/// No regex is involved, so characters like `.` inside dictionary words are
/// compared literally.
#[must_use]
pub fn match_positions(word: &[char], positions: &[Position]) -> bool {
    word.len() == positions.len()
        && word.iter().zip(positions).all(|(&c, &pos)| pos.matches(c))
}

/// Convenience wrapper over [`match_positions`] for `&str` words.
#[must_use]
pub fn match_pattern(word: &str, positions: &[Position]) -> bool {
    let mut chars = word.chars();
    positions.iter().all(|&pos| chars.next().is_some_and(|c| pos.matches(c)))
        && chars.next().is_none()
}

/// Match `word` against one generated arrangement in which the wildcard
/// symbol stands for an unfilled position.
#[must_use]
pub(crate) fn match_arrangement(word: &[char], arrangement: &[char]) -> bool {
    word.len() == arrangement.len()
        && word.iter().zip(arrangement).all(|(&c, &a)| a.is_wildcard() || a == c)
}
