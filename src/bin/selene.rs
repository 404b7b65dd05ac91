// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `selene` — print the Moon's phase for a date and when a phase comes next.
//!
//! ```text
//! selene                       # now, and the next full moon
//! selene 2024-01-01 --next "New Moon" --horizon 45
//! selene 2024-01-01 --days 60 --json
//! ```

use std::error::Error;
use std::fmt::{self, Write};

use chrono::Local;
use clap::Parser;
use selene::{PhaseEngine, PhaseResult, PhaseSpan, QueryDate, DEFAULT_HORIZON_DAYS};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selene")]
#[command(about = "Moon phase calculator")]
#[command(version)]
struct Cli {
    /// Query date as YYYY-MM-DD (default: now, local time)
    date: Option<String>,

    /// Phase to search for after the query date
    #[arg(long, default_value = "Full Moon")]
    next: String,

    /// Days to scan when searching for the next phase
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
    horizon: u32,

    /// Also list the phase runs of the next N days
    #[arg(long)]
    days: Option<u32>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "selene=debug" } else { "selene=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // with no date, report the current instant and search from today
    let query = match &cli.date {
        Some(date) => date.into_query()?,
        None => Local::now().naive_local(),
    };
    let search_start = query.date();

    let engine = PhaseEngine::default();
    let current = engine.phase_at(query);
    let next = engine.next_occurrence_within(search_start, &cli.next, cli.horizon)?;
    let spans = match cli.days {
        Some(days) => engine.phase_spans(search_start, days)?,
        None => Vec::new(),
    };
    tracing::debug!(date = %current.date, phase = current.phase_name(), "query evaluated");

    if cli.json {
        let report = serde_json::json!({
            "current": current,
            "next": next,
            "spans": spans,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            render_report(&current, &cli.next, cli.horizon, next.as_ref(), &spans)?
        );
    }
    Ok(())
}

fn render_report(
    current: &PhaseResult,
    target: &str,
    horizon: u32,
    next: Option<&PhaseResult>,
    spans: &[PhaseSpan],
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Moon Phase Calculator Results for {}", current.date)?;
    writeln!(out, "Phase: {} {}", current.symbol(), current.phase_name())?;
    writeln!(out, "Lunar Age: {:.2} days", current.lunar_age.value())?;
    writeln!(out, "Phase Percentage: {:.2}%", current.phase_percent)?;
    writeln!(out, "Illumination: {:.2}%", current.illumination)?;

    writeln!(out)?;
    match next {
        Some(found) => writeln!(out, "Next {target}: {}", found.date)?,
        None => writeln!(out, "No {target} within {horizon} days")?,
    }

    if !spans.is_empty() {
        writeln!(out)?;
        for span in spans {
            writeln!(out, "{span} ({} days)", span.days())?;
        }
    }
    Ok(out)
}
