mod age;
mod birthday;
mod input;
mod report;
mod svg;
mod theme;
mod validate;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::{debug, info};

use theme::ThemeStore;

/// Exact age, next birthday and days lived from a birth date.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Day of birth (1-31)
    day: Option<String>,

    /// Month of birth (1-12)
    month: Option<String>,

    /// Year of birth (1900 or later; two-digit years are expanded)
    year: Option<String>,

    /// Write an SVG card of the result to this path
    #[arg(long, value_name = "PATH")]
    card: Option<PathBuf>,

    /// Flip the saved dark/light theme before rendering
    #[arg(long)]
    toggle_theme: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("agecalc={log_level}"))
        .with_writer(std::io::stderr)
        .init();

    let store = ThemeStore::open_default()?;
    let mut active = store.load();
    if args.toggle_theme {
        active = active.toggled();
        store.save(active)?;
        info!("theme set to {}", active.as_str());
    }

    if args.toggle_theme && args.day.is_none() && args.month.is_none() && args.year.is_none() {
        println!("Theme is now {}.", active.as_str());
        return Ok(ExitCode::SUCCESS);
    }

    let today = Local::now().date_naive();

    let padded_day = args.day.as_deref().map(input::zero_pad_day);
    let expanded_year = args
        .year
        .as_deref()
        .map(|raw| input::expand_two_digit_year(raw, today.year()));
    debug!(
        "normalized input: {:?} {:?} {:?}",
        padded_day, args.month, expanded_year
    );

    let day = padded_day.as_deref().and_then(input::parse_field);
    let month = args.month.as_deref().and_then(input::parse_field);
    let year = expanded_year.as_deref().and_then(input::parse_field);

    let birth = match validate::validate(day, month, year, today) {
        Ok(birth) => birth,
        Err(errors) => {
            report::print_errors(&errors);
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = age::summarize(birth, today);
    debug!("computed {result:?}");

    let rows = report::result_rows(birth, &result);
    report::print_report(&rows);

    if let Some(path) = &args.card {
        let card = svg::render_card(&rows, active);
        fs::write(path, card).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
