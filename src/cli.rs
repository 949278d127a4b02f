use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Small date and time utilities.
#[derive(Parser)]
#[command(name = "datekit", version, about = "Date parsing, leap years, time spans, clock angles and day-of-year lookup")]
pub struct Cli {
    /// Path to TOML configuration file (default: ./datekit.toml, then the XDG config directory).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse an RFC 2822 (or loose natural) date.
    Rfc2822 {
        /// Date text, e.g. "Tue, 26 Jan 2016 13:48:02 GMT".
        text: String,
    },
    /// Parse an ISO 8601 date-time.
    Iso8601 {
        /// Date text, e.g. "2016-01-19T16:07:37+00:00".
        text: String,
    },
    /// Check whether a year is a leap year.
    Leap {
        /// Proleptic Gregorian year.
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Format the time between two ISO 8601 instants as HH:mm:ss.sss.
    Span {
        /// Start instant.
        start: String,
        /// End instant.
        end: String,
    },
    /// Angle between the clock hands at an ISO 8601 instant (UTC).
    Angle {
        /// Instant to read the hour and minute from.
        instant: String,
        /// Print degrees instead of the configured unit.
        #[arg(long)]
        degrees: bool,
    },
    /// Convert a day-of-year ordinal to "Month, day".
    Day {
        /// 1-based day of the year.
        number: u16,
        /// Use the 366-day leap-year table.
        #[arg(long)]
        leap: bool,
    },
    /// Write a default configuration file.
    InitConfig {
        /// Destination (default: the XDG config directory).
        path: Option<PathBuf>,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Rfc2822 { .. } => "rfc2822",
            Command::Iso8601 { .. } => "iso8601",
            Command::Leap { .. } => "leap",
            Command::Span { .. } => "span",
            Command::Angle { .. } => "angle",
            Command::Day { .. } => "day",
            Command::InitConfig { .. } => "init-config",
        }
    }
}
