mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use datekit::config::{AngleUnit, Config};
use datekit::logger;
use datekit::utils::{self, Instant};
use serde::Serialize;

/// Outcome of a single subcommand, printed as text or JSON.
#[derive(Debug, Serialize)]
struct Report {
    command: &'static str,
    input: String,
    result: Outcome,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Outcome {
    Instant(Instant),
    Flag(bool),
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
            Outcome::Flag(flag) => write!(f, "{}", flag),
            Outcome::Number(number) => write!(f, "{}", number),
            Outcome::Text(text) => write!(f, "{}", text),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let report = run(&cli.command, &config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).context("Failed to serialize result")?);
    } else {
        println!("{}", report.result);
    }

    Ok(())
}

/// Execute one subcommand against the library.
fn run(command: &Command, config: &Config) -> Result<Report> {
    let (input, result) = match command {
        Command::Rfc2822 { text } => {
            let instant = utils::parse_rfc2822_with(text, &config.parse.loose_formats)?;
            (text.clone(), Outcome::Instant(instant))
        }
        Command::Iso8601 { text } => (text.clone(), Outcome::Instant(utils::parse_iso8601(text)?)),
        Command::Leap { year } => (year.to_string(), Outcome::Flag(utils::is_leap(*year))),
        Command::Span { start, end } => {
            let from = utils::parse_iso8601(start)?;
            let to = utils::parse_iso8601(end)?;
            (format!("{} {}", start, end), Outcome::Text(utils::format_time_span(&from, &to)))
        }
        Command::Angle { instant, degrees } => {
            let at = utils::parse_iso8601(instant)?;
            let angle = if *degrees || config.display.angle_unit == AngleUnit::Degrees {
                utils::clock_hands_angle_degrees(&at)
            } else {
                utils::clock_hands_angle(&at)
            };
            (instant.clone(), Outcome::Number(angle))
        }
        Command::Day { number, leap } => {
            let date = utils::day_of_year_to_date(*number, *leap)?;
            (format!("{} {}", number, if *leap { "leap" } else { "common" }), Outcome::Text(date))
        }
        Command::InitConfig { .. } => anyhow::bail!("init-config is handled before configuration is loaded"),
    };

    log::debug!("{} {:?} -> {}", command.name(), input, result);
    Ok(Report {
        command: command.name(),
        input,
        result,
    })
}
