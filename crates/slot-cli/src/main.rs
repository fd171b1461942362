//! `slots` CLI — compute appointment slots for a working day from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for the built-in sample day
//! slots demo
//!
//! # Slots for a JSON request (stdin → stdout)
//! echo '{"work_day":{"start":"09:00","stop":"10:00"},"slot_duration_minutes":30}' | slots compute
//!
//! # From file to file, as JSON
//! slots compute -i day.json -o slots.json --format json
//!
//! # Free windows only
//! slots windows -i day.json
//! ```
//!
//! Logs go to stderr. `--verbose` enables debug output; otherwise `RUST_LOG`
//! is honoured and defaults to `warn`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::{Interval, SlotRequest};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Compute free appointment slots in a working day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute slots for the built-in sample day (09:00-21:00, 30 minute slots)
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Compute slots for a JSON request document
    Compute {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the free windows of a JSON request document, without slicing
    Windows {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Output rendering for a list of intervals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `HH:MM-HH:MM` per line
    Text,
    /// Pretty-printed JSON array of `{"start","stop"}` objects
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { format } => {
            let request = SlotRequest::demo().context("Failed to build the sample day")?;
            let slots = request.compute().context("Failed to compute slots")?;
            info!(slots = slots.len(), "computed slots for the sample day");
            write_output(None, &render(&slots, format)?)?;
        }
        Commands::Compute {
            input,
            output,
            format,
        } => {
            let request = read_request(input.as_deref())?;
            let slots = request.compute().context("Failed to compute slots")?;
            info!(slots = slots.len(), "computed slots");
            write_output(output.as_deref(), &render(&slots, format)?)?;
        }
        Commands::Windows { input, format } => {
            let request = read_request(input.as_deref())?;
            let windows = request
                .windows()
                .context("Failed to compute free windows")?;
            info!(windows = windows.len(), "computed free windows");
            write_output(None, &render(&windows, format)?)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_request(path: Option<&str>) -> Result<SlotRequest> {
    let json = read_input(path)?;
    SlotRequest::from_json(&json).context("Failed to parse slot request")
}

fn render(intervals: &[Interval], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(intervals
            .iter()
            .map(|i| format!("{i}\n"))
            .collect::<String>()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(intervals)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
