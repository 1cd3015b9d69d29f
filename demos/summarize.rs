use std::path::PathBuf;

use clap::Parser;
use weather::{
    calculate_mean, convert_f_to_c, find_max, find_min, format_temperature,
    generate_daily_summary, generate_summary, load_data_from_csv,
};

/// Prints a summary of a `date,min_temp,max_temp` csv file.
#[derive(Debug, Parser)]
struct Args {
    /// Path of the csv file.
    input: PathBuf,

    /// Print the per day overview instead of the summary.
    #[arg(long)]
    daily: bool,

    /// Log skipped rows.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    println!("opening {}", args.input.display());
    let dataset = load_data_from_csv(&args.input)?;

    let summary = if args.daily {
        generate_daily_summary(&dataset)?
    } else {
        generate_summary(&dataset)?
    };
    println!("{summary}");

    if dataset.is_empty() {
        return Ok(());
    }

    let lows = dataset.min_temps();
    let highs = dataset.max_temps();
    println!();
    println!(
        "Mean low: {}",
        format_temperature(convert_f_to_c(calculate_mean(&lows)?)?)
    );
    println!(
        "Mean high: {}",
        format_temperature(convert_f_to_c(calculate_mean(&highs)?)?)
    );
    if let Some((low, index)) = find_min(&lows) {
        println!(
            "Coldest: {} on {}",
            format_temperature(convert_f_to_c(low)?),
            dataset[index].date
        );
    }
    if let Some((high, index)) = find_max(&highs) {
        println!(
            "Warmest: {} on {}",
            format_temperature(convert_f_to_c(high)?),
            dataset[index].date
        );
    }

    Ok(())
}
