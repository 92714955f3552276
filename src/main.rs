//! Command-line entry point for the room occupancy report.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use room_occupancy::error::ReportError;
use room_occupancy::pipeline::generate_report;

fn cli() -> Command {
    Command::new("room-occupancy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Determines which rooms are occupied for each hour of each weekday")
        .arg(
            Arg::new("schedule")
                .value_name("TERM,FILE")
                .help("Target term and schedule CSV, e.g. 202408,CourseHistory.csv"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output-file")
                .value_name("FILE")
                .default_value("rooms.csv")
                .help("Name of the output file, a CSV of room occupation"),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut command = cli();
    let matches = command.clone().get_matches();

    let Some(schedule) = matches.get_one::<String>("schedule") else {
        command.print_help()?;
        std::process::exit(1);
    };

    let (term, file) = schedule
        .split_once(',')
        .ok_or_else(|| ReportError::InvalidArgument {
            name: "schedule".to_string(),
            value: schedule.clone(),
            message: "expected term,filename, e.g. 202408,CourseHistory.csv".to_string(),
        })?;

    let output = matches
        .get_one::<String>("output")
        .expect("output has a default value");

    info!(term, file, output = %output, "inputs");

    let counts = generate_report(term, file, output)
        .with_context(|| format!("generating room report for term {term}"))?;

    info!(
        accepted = counts.accepted,
        total_rows = counts.total_rows,
        "report complete"
    );

    Ok(())
}
