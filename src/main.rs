use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordsense::dictionary::Dictionary;
use wordsense::solver::{Query, QueryMode, SolverError};

/// Find dictionary words that are anagrams of some letters or match a
/// wildcard pattern ('.' = any one letter)
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The letters or pattern; several arguments are joined (e.g. "l h m e" or "e..l")
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        env = "WORDSENSE_DICTIONARY",
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist-german.txt")
    )]
    dictionary: String,

    /// How to read the query
    #[arg(short, long, value_enum, default_value_t = QueryMode::Auto)]
    mode: QueryMode,

    /// Print at most this many matches
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

/// Entry point of the wordsense CLI.
///
/// Delegates to [`try_main`], printing any error in detailed form before
/// exiting with code 1.
fn main() -> ExitCode {
    wordsense::log::init_logger(wordsense::log::debug_requested());

    let t_run = Instant::now();
    log::info!("++++ started");

    let outcome = try_main();
    log::info!("++++ finished in {:.3}s", t_run.elapsed().as_secs_f64());

    if let Err(e) = outcome {
        if let Some(solver_err) = e.downcast_ref::<SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments and the query (no I/O happens for a bad query).
/// 2. Load the dictionary, keeping only words of the query's length.
/// 3. Evaluate the query.
/// 4. Print matches on stdout, diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let input = cli.query.concat();
    let query = Query::parse(&input, cli.mode).map_err(SolverError::from)?;
    log::debug!("Parsed {query}");

    // 1. Load only words that can possibly match
    let t_load = Instant::now();
    let target_len = query.len();
    let dictionary = Dictionary::load_from_path_filtered(&cli.dictionary, |w| w.chars().count() == target_len)
        .map_err(SolverError::from)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Evaluate
    let t_solve = Instant::now();
    let result = query.evaluate(&dictionary);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    let kind = result.kind;
    let pruned_size = result.pruned_size;
    let candidates = result.candidates_examined;
    let matches = result.matches.into_sorted_vec();

    // 3. Print matches
    let limit = cli.limit.unwrap_or(matches.len());
    for word in matches.iter().take(limit) {
        println!("{word}");
    }
    if matches.len() > limit {
        eprintln!("… {} more not shown (--limit {limit})", matches.len() - limit);
    }

    // 4. Diagnostics
    eprintln!(
        "Loaded {} words of length {target_len} in {load_secs:.3}s; {kind} query kept {pruned_size} after pruning, examined {candidates} candidates in {solve_secs:.3}s ({} matches).",
        dictionary.len(),
        matches.len()
    );

    Ok(())
}
