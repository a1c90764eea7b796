use anyhow::Result;
use clap::Parser;
use punto_simulator::config::{
    parse_log_level, FileConfig, OutputFormat, RunConfig, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT,
};
use punto_simulator::run;
use punto_types::constants::{
    DEFAULT_BURN_CARDS, DEFAULT_DECKS, DEFAULT_MAX_HANDS, DEFAULT_NUM_SHOES,
};
use punto_types::BatchConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Baccarat shoe simulator with burn/cut support.")]
struct Args {
    /// Number of shoes to simulate (default: 10).
    #[arg(long)]
    num_shoes: Option<u32>,

    /// Number of decks in each shoe (default: 8).
    #[arg(long)]
    decks: Option<u32>,

    /// Cards burned / cut off the top at the start of each shoe (default: 0).
    #[arg(long)]
    burn_cards: Option<usize>,

    /// Maximum hands per shoe (default: 40).
    #[arg(long, conflicts_with = "no_hand_cap")]
    max_hands: Option<u32>,

    /// Deal each shoe until fewer than six cards remain.
    #[arg(long, default_value_t = false)]
    no_hand_cap: bool,

    /// Master seed for reproducible output (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Output path (default: baccarat_shoes.csv).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: csv).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// YAML file supplying any setting not given on the command line.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error (default: info).
    #[arg(long)]
    log_level: Option<String>,
}

fn build_config(args: &Args) -> Result<RunConfig> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let max_hands = if args.no_hand_cap {
        None
    } else if let Some(cap) = args.max_hands {
        Some(cap)
    } else if file.no_hand_cap.unwrap_or(false) {
        None
    } else {
        Some(file.max_hands.unwrap_or(DEFAULT_MAX_HANDS))
    };

    let batch = BatchConfig {
        num_shoes: args.num_shoes.or(file.num_shoes).unwrap_or(DEFAULT_NUM_SHOES),
        decks: args.decks.or(file.decks).unwrap_or(DEFAULT_DECKS),
        burn_cards: args
            .burn_cards
            .or(file.burn_cards)
            .unwrap_or(DEFAULT_BURN_CARDS),
        max_hands,
        seed: args.seed.or(file.seed),
    };
    batch.validate()?;

    let log_level = args
        .log_level
        .as_deref()
        .or(file.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Ok(RunConfig {
        batch,
        output: args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        format: args.format.or(file.format).unwrap_or_default(),
        log_level: parse_log_level(log_level)?,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = run(&config)?;
    println!(
        "simulated {} shoes -> {} hands written to {}",
        config.batch.num_shoes,
        outcome.hands,
        config.output.display()
    );
    Ok(())
}
