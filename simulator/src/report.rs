//! Hand report writers.
//!
//! The CSV layout is consumed by other analysis tools and must stay byte-compatible:
//! header row, dash-joined ranks, `P`/`B`/`T` winner codes, `0`/`1` naturals, and
//! `\r\n` row terminators.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use punto_types::{HandResult, Rank};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: [&str; 8] = [
    "shoe_id",
    "hand_number",
    "player_cards",
    "banker_cards",
    "player_total",
    "banker_total",
    "winner",
    "natural",
];

const CSV_LINE_TERMINATOR: &str = "\r\n";

/// Ranks joined with dashes, e.g. `9-8-1`.
pub fn format_cards(cards: &[Rank]) -> String {
    let mut out = String::with_capacity(cards.len().saturating_mul(3));
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            out.push('-');
        }
        let _ = write!(out, "{}", card);
    }
    out
}

pub fn write_csv<W: Write>(results: &[HandResult], mut out: W) -> io::Result<()> {
    write!(out, "{}{}", CSV_HEADER.join(","), CSV_LINE_TERMINATOR)?;
    for hand in results {
        write!(
            out,
            "{},{},{},{},{},{},{},{}{}",
            hand.shoe_id,
            hand.hand_number,
            format_cards(&hand.player_cards),
            format_cards(&hand.banker_cards),
            hand.player_total,
            hand.banker_total,
            hand.winner.code(),
            u8::from(hand.natural),
            CSV_LINE_TERMINATOR,
        )?;
    }
    Ok(())
}

pub fn write_jsonl<W: Write>(results: &[HandResult], mut out: W) -> io::Result<()> {
    for hand in results {
        serde_json::to_writer(&mut out, hand)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write `results` to `path`, replacing any existing file.
pub fn write_report(results: &[HandResult], path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(results, &mut out),
        OutputFormat::Jsonl => write_jsonl(results, &mut out),
    }
    .and_then(|()| out.flush())
    .with_context(|| format!("could not write report to {}", path.display()))
}
