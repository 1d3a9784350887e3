//! wordtally - A CLI word counter
//!
//! wordtally provides:
//! - Maximal-run tokenizing over a configurable separator alphabet
//! - Case-sensitive word counts in first-seen order
//! - Case-insensitive alphabetical reports (html/md/json/jsonl/text)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
