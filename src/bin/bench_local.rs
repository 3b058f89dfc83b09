//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Ad-hoc timing of a handful of anagram and pattern queries on *your* machine.
//! - Loads the dictionary once, then runs each query several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few matches:            `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparisons.
//! - One warm-up run per query is done (not included in timing).
//! - Printing is kept outside the timed section.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsense::dictionary::Dictionary;
use wordsense::solver::{Query, QueryMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        env = "WORDSENSE_DICTIONARY",
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist-german.txt")
    )]
    dictionary: String,

    /// Number of repeats per query (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many matches per query (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: the query text and how to read it.
#[derive(Clone)]
struct Case {
    query: &'static str,
    mode: QueryMode,
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { query: "lhme", mode: QueryMode::Anagram },
        Case { query: "ratsen", mode: QueryMode::Anagram },
        Case { query: "aeinrst", mode: QueryMode::Anagram },
        // many repeated letters: few distinct arrangements
        Case { query: "eeennrrtt", mode: QueryMode::Anagram },
        Case { query: "h.llo", mode: QueryMode::Anagram },
        Case { query: "e..l", mode: QueryMode::Pattern },
        Case { query: "..st", mode: QueryMode::Pattern },
        Case { query: "s.....e", mode: QueryMode::Pattern },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_QUERY_LEN: usize = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary).map_err(|e| e.display_detailed())?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let view = dictionary.view();
    let mut summary: Vec<(String, f64, usize, usize)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        eprintln!("\n[{:02}] {} ({:?})", idx + 1, case.query, case.mode);

        let query = match Query::parse(case.query, case.mode) {
            Ok(query) => query,
            Err(e) => {
                eprintln!("  ✗ {}", e.display_detailed());
                continue;
            }
        };

        // warm-up
        let _ = black_box(query.evaluate_view(&view));

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = query.evaluate_view(black_box(&view));
            let solve_secs = t_solve.elapsed().as_secs_f64();
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} matches, {} candidates)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                result.matches.len(),
                result.candidates_examined
            );
            times.push(solve_secs);
            last = Some(result);
        }

        let med = median(times);
        let (num_matches, candidates) = match last {
            Some(result) => {
                let row = (result.matches.len(), result.candidates_examined);
                for word in result.matches.into_sorted_vec().iter().take(cli.print_limit) {
                    println!("{word}");
                }
                row
            }
            None => (0, 0),
        };

        summary.push((case.query.to_string(), med, num_matches, candidates));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_QUERY_LEN$} | {:>10} | {:>9} | {:>12}", "query", "median (s)", "# matches", "# candidates");
    eprintln!("{:-<MAX_QUERY_LEN$}-+-{:-<10}-+-{:-<9}-+-{:-<12}", "", "", "", "");
    for (query, med, num_matches, candidates) in &summary {
        eprintln!("{query:<MAX_QUERY_LEN$} | {med:>10.3} | {num_matches:>9} | {candidates:>12}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_parse() {
        for case in get_cases() {
            assert!(Query::parse(case.query, case.mode).is_ok(), "{}", case.query);
        }
    }
}
