use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tally_types::Currency;

#[derive(Parser)]
#[command(
    name = "tally",
    about = "tally — cart totals, currency formatting, and quick numeric stats",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file (defaults to ./tally.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Total a JSON cart of {price, quantity} items
    Total(TotalArgs),
    /// Format an amount with a currency prefix
    Format(FormatArgs),
    /// Extract the numeric value from a price string
    ParsePrice(ParsePriceArgs),
    /// Summarize a JSON array of numbers (nulls are skipped)
    Stats(DataArgs),
    /// Double every positive value in a JSON array of numbers
    Process(DataArgs),
    /// Keep values within an inclusive range
    Filter(FilterArgs),
}

#[derive(Args)]
pub struct TotalArgs {
    pub file: PathBuf,
    #[arg(short, long)]
    pub currency: Option<Currency>,
}

#[derive(Args)]
pub struct FormatArgs {
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    #[arg(short, long)]
    pub currency: Option<Currency>,
}

#[derive(Args)]
pub struct ParsePriceArgs {
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

#[derive(Args)]
pub struct DataArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct FilterArgs {
    pub file: PathBuf,
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub min: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
}
