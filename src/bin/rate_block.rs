//! Rate an entire quote block from a CSV file
//!
//! Outputs one row per quote with the base premium, optimized premium,
//! and range, plus summary statistics for the block.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use rating_engine::quote::{load_quotes, loader::DEFAULT_QUOTES_PATH};
use rating_engine::{QuoteRating, RatingFactors, RatingRunner};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Rate a block of quotes from CSV")]
struct Args {
    /// Path to the quotes CSV
    #[arg(long, default_value = DEFAULT_QUOTES_PATH)]
    quotes: PathBuf,

    /// Rating tables directory (built-in pricing when omitted)
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Evaluation date, YYYY-MM-DD (today when omitted)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Output CSV path
    #[arg(long, default_value = "block_rating_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());

    log::info!("Loading quotes from {}", args.quotes.display());
    let quotes = load_quotes(&args.quotes)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Failed to load quotes from {}", args.quotes.display()))?;
    println!("Loaded {} quotes in {:?}", quotes.len(), start.elapsed());

    let factors = match &args.tables {
        Some(path) => RatingFactors::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Failed to load tables from {}", path.display()))?,
        None => RatingFactors::default_pricing(),
    };
    let runner = RatingRunner::with_factors(factors);

    // Each quote rates independently, so the block parallelizes freely
    let ratings: Vec<QuoteRating> = quotes
        .par_iter()
        .map(|quote| runner.rate(quote, as_of))
        .collect();

    let mut file = File::create(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;

    writeln!(
        file,
        "QuoteID,BasePremium,SeasonalFactor,PropertyAgeFactor,RegionalRiskFactor,OptimizedPremium,MinimumPremium,MaximumPremium"
    )?;

    for rating in &ratings {
        writeln!(
            file,
            "{},{:.2},{:.4},{:.4},{:.4},{:.2},{:.2},{:.2}",
            rating.quote_id,
            rating.base.premium,
            rating.optimized.adjustments.seasonal,
            rating.optimized.adjustments.property_age,
            rating.optimized.adjustments.regional_risk,
            rating.optimized.premium,
            rating.range.minimum_premium,
            rating.range.maximum_premium,
        )?;
    }

    println!("Rated {} quotes as of {}", ratings.len(), as_of);
    println!("Full results written to: {}", args.output.display());

    if !ratings.is_empty() {
        let premiums: Vec<f64> = ratings.iter().map(|r| r.optimized.premium).collect();
        let total: f64 = premiums.iter().sum();
        let min = premiums.iter().cloned().fold(f64::MAX, f64::min);
        let max = premiums.iter().cloned().fold(f64::MIN, f64::max);

        println!("\nSummary:");
        println!("  Quotes:          {}", ratings.len());
        println!("  Total Premium:   ${:.2}", total);
        println!("  Average Premium: ${:.2}", total / premiums.len() as f64);
        println!("  Min Premium:     ${:.2}", min);
        println!("  Max Premium:     ${:.2}", max);
    }

    println!("\nCompleted in {:?}", start.elapsed());
    Ok(())
}
