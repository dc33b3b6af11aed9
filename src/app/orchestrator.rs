//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging.
//! 2. Validates the dictionary path.
//! 3. Loads the dictionary into an adjacency index, writing a snapshot if asked.
//! 4. Validates the starting and ending words.
//! 5. Runs the shortest-ladder search or the enumeration.
//! 6. Writes the search tree if asked and prints the result.
//!
//! `quiet_mode` turns off the verbose log and trims stdout to the result.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::ladder::WordLadder;

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for an unreadable dictionary, an invalid query, an
/// unsolvable ladder, or a failure writing the snapshot or tree output.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The run continues without the verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_search(&cli, quiet_mode);

    // Flush whatever was logged, including the error that ended the run.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }

    let summary = result?;
    println!("{}", summary);
    Ok(())
}

fn run_search(cli: &Cli, quiet_mode: bool) -> Result<String, AppError> {
    file_handler::validate_dictionary_path(&cli.dictionary, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Dictionary: {}", cli.dictionary.display());
    verbose_println!(quiet_mode, "Ladder: {} -> {}", cli.start, cli.end);
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    // A snapshot holds every neighbor list, so build them up front.
    let eager = cli.eager || cli.snapshot.is_some();
    let index = processing::load_index(&cli.dictionary, eager, quiet_mode)?;
    if let Some(snapshot_path) = &cli.snapshot {
        processing::write_snapshot(snapshot_path, &index, quiet_mode)?;
    }

    verbose_println!(quiet_mode, "\n[STEP 2] Validating words...");
    let mut word_ladder = WordLadder::new(index);
    if let Err(e) = word_ladder.set_query(&cli.start, &cli.end) {
        verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
        return Err(e.into());
    }

    let report = if cli.all {
        processing::run_enumeration(&word_ladder, quiet_mode)?
    } else {
        processing::run_shortest(&word_ladder, quiet_mode)?
    };

    if let Some(tree_path) = &cli.tree {
        file_handler::write_content_to_file(tree_path, &report.tree.to_string()).map_err(|e| {
            verbose_eprintln!(
                quiet_mode,
                "[ERROR] Failed to write search tree ({}): {}",
                tree_path.display(),
                e
            );
            AppError::Io(e)
        })?;
        verbose_println!(
            quiet_mode,
            "\n[INFO] Search tree written to {}",
            tree_path.display()
        );
    }

    Ok(report.summary)
}
