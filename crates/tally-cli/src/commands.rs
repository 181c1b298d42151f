use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tally_cart::{format_currency, parse_price, Cart};
use tally_stats::{filter_data, DataProcessor, FilterBounds, Stats};
use tally_types::Currency;
use tracing::info;

use crate::cli::*;
use crate::config::TallyConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = TallyConfig::load(cli.config.as_deref())?;
    let output = execute(cli.command, &config, &cli.format)?;
    println!("{output}");
    Ok(())
}

/// Run one subcommand and return what should be printed.
pub fn execute(command: Command, config: &TallyConfig, format: &OutputFormat) -> anyhow::Result<String> {
    match command {
        Command::Total(args) => cmd_total(args, config, format),
        Command::Format(args) => Ok(cmd_format(args, config, format)),
        Command::ParsePrice(args) => cmd_parse_price(args, format),
        Command::Stats(args) => cmd_stats(args, format),
        Command::Process(args) => cmd_process(args, format),
        Command::Filter(args) => cmd_filter(args, format),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn pick_currency(flag: Option<Currency>, config: &TallyConfig) -> Currency {
    flag.unwrap_or_else(|| config.currency.clone())
}

fn render_values(values: &[f64]) -> String {
    if values.is_empty() {
        return "(none)".dimmed().to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_total(args: TotalArgs, config: &TallyConfig, format: &OutputFormat) -> anyhow::Result<String> {
    let cart: Cart = read_json(&args.file)?;
    let currency = pick_currency(args.currency, config);
    let total = cart.total();
    anyhow::ensure!(
        total.is_finite(),
        "cart total in {} is not a finite number ({total})",
        args.file.display()
    );
    let formatted = format_currency(total, &currency);
    info!(file = %args.file.display(), items = cart.len(), total, "cart totalled");

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "items": cart.len(),
            "quantity": cart.total_quantity(),
            "total": total,
            "currency": currency,
            "formatted": formatted,
        }))?,
        OutputFormat::Text => format!(
            "{} item(s), quantity {}\nTotal: {}",
            cart.len().to_string().bold(),
            cart.total_quantity(),
            formatted.green().bold()
        ),
    })
}

fn cmd_format(args: FormatArgs, config: &TallyConfig, format: &OutputFormat) -> String {
    let currency = pick_currency(args.currency, config);
    let formatted = format_currency(args.amount, &currency);
    match format {
        OutputFormat::Json => json!({
            "amount": args.amount,
            "currency": currency,
            "formatted": formatted,
        })
        .to_string(),
        OutputFormat::Text => formatted.green().to_string(),
    }
}

fn cmd_parse_price(args: ParsePriceArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let price = parse_price(&args.text)?;
    Ok(match format {
        OutputFormat::Json => json!({ "input": args.text, "price": price }).to_string(),
        OutputFormat::Text => format!("{} → {}", args.text.dimmed(), price.to_string().green()),
    })
}

fn cmd_stats(args: DataArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let processor: DataProcessor = read_json(&args.file)?;
    let stats = processor.stats();
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&stats)?,
        OutputFormat::Text => render_stats(&stats),
    })
}

fn render_stats(stats: &Stats) -> String {
    let extreme = |v: Option<f64>| v.map_or_else(|| "-".dimmed().to_string(), |v| v.to_string());
    format!(
        "count:   {}\ntotal:   {}\naverage: {}\nmin:     {}\nmax:     {}",
        stats.count.to_string().bold(),
        stats.total,
        stats.average.to_string().cyan(),
        extreme(stats.min),
        extreme(stats.max),
    )
}

fn cmd_process(args: DataArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let processor: DataProcessor = read_json(&args.file)?;
    let values = processor.process();
    Ok(match format {
        OutputFormat::Json => json!({ "values": values }).to_string(),
        OutputFormat::Text => render_values(&values),
    })
}

fn cmd_filter(args: FilterArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let bounds = FilterBounds::new(args.min, args.max)?;
    let processor: DataProcessor = read_json(&args.file)?;
    let data: Vec<f64> = processor.present().collect();
    let values = filter_data(&data, bounds);
    Ok(match format {
        OutputFormat::Json => json!({
            "min": bounds.min,
            "max": bounds.max,
            "values": values,
        })
        .to_string(),
        OutputFormat::Text => format!(
            "kept {} of {}: {}",
            values.len().to_string().bold(),
            data.len(),
            render_values(&values)
        ),
    })
}
