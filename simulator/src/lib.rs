//! Command-line front end for the punto engine.
//!
//! Resolves configuration, runs the batch, writes the hand report, and logs an
//! outcome summary. All simulation logic lives in `punto-execution`.

use anyhow::{Context, Result};
use punto_execution::simulate_many_shoes;
use tracing::debug;

pub mod config;
pub mod report;
pub mod summary;

pub use config::{FileConfig, OutputFormat, RunConfig};
pub use report::{write_csv, write_jsonl, write_report};
pub use summary::OutcomeSummary;

/// What a completed run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub hands: usize,
    pub summary: OutcomeSummary,
}

/// Simulate the configured batch and write its report.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let results = simulate_many_shoes(&config.batch).context("simulation aborted")?;
    write_report(&results, &config.output, config.format)?;

    let mut summary = OutcomeSummary::default();
    for shoe in results.chunk_by(|a, b| a.shoe_id == b.shoe_id) {
        let shoe_summary = OutcomeSummary::from_results(shoe);
        debug!(
            shoe_id = shoe[0].shoe_id,
            hands = shoe_summary.hands,
            player_wins = shoe_summary.player_wins,
            banker_wins = shoe_summary.banker_wins,
            ties = shoe_summary.ties,
            "shoe summary"
        );
        summary.merge(&shoe_summary);
    }
    summary.log();
    Ok(RunOutcome {
        hands: results.len(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use punto_types::BatchConfig;
    use tracing::Level;

    fn run_config(output: std::path::PathBuf, format: OutputFormat, seed: u64) -> RunConfig {
        RunConfig {
            batch: BatchConfig {
                num_shoes: 3,
                decks: 8,
                burn_cards: 10,
                max_hands: Some(40),
                seed: Some(seed),
            },
            output,
            format,
            log_level: Level::INFO,
        }
    }

    #[test]
    fn test_run_writes_every_hand() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hands.csv");
        let outcome = run(&run_config(path.clone(), OutputFormat::Csv, 1)).expect("run");
        assert_eq!(outcome.hands, 120);
        assert_eq!(outcome.summary.hands, 120);
        assert_eq!(
            outcome.summary.player_wins + outcome.summary.banker_wins + outcome.summary.ties,
            120
        );

        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text.lines().count(), 121);
    }

    #[test]
    fn test_per_shoe_summaries_add_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = run_config(dir.path().join("hands.csv"), OutputFormat::Csv, 9);
        let outcome = run(&config).expect("run");
        let results = simulate_many_shoes(&config.batch).expect("batch");
        assert_eq!(outcome.summary, OutcomeSummary::from_results(&results));
    }

    #[test]
    fn test_same_seed_same_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        run(&run_config(a.clone(), OutputFormat::Csv, 2024)).expect("run");
        run(&run_config(b.clone(), OutputFormat::Csv, 2024)).expect("run");
        assert_eq!(
            std::fs::read(&a).expect("read"),
            std::fs::read(&b).expect("read")
        );
    }

    #[test]
    fn test_jsonl_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hands.jsonl");
        let outcome = run(&run_config(path.clone(), OutputFormat::Jsonl, 5)).expect("run");
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text.lines().count(), outcome.hands);
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hands.csv");
        let mut config = run_config(path.clone(), OutputFormat::Csv, 1);
        config.batch.decks = 0;
        let err = run(&config).unwrap_err();
        assert!(
            format!("{err:#}").contains("decks must be > 0"),
            "unexpected error: {err:#}"
        );
        assert!(!path.exists());
    }
}
