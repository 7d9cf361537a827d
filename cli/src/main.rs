//! Answer fizzbuzz for numbers, lists and ranges.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use fizzbuzz::RangeSpec;
use fizzbuzz_cli::config::{CliConfig, DEFAULT_CONFIG_FILE, OutputFormat, load_config};
use fizzbuzz_cli::{cli, exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fizzbuzz",
    version,
    about = "Answer fizzbuzz for numbers, lists and ranges"
)]
struct Cli {
    /// Configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the configured output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single number (integer or float).
    Value {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Answer each integer of a list, in order.
    List {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Answer START (inclusive) to STOP (exclusive), stepping by STEP.
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        stop: i64,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        step: i64,
    },
    /// Answer 1 through UPTO (inclusive). Defaults to `count.upto` from config.
    Count { upto: Option<u32> },
    /// Answer a JSON number, array of integers, or {"start", "stop", "step"} object.
    Json { input: String },
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let Cli {
        config,
        format,
        command,
    } = Cli::parse();
    match command {
        Command::Init { force } => cli::init(&config, force),
        Command::Value { value } => cli::value(&value),
        Command::List { values } => {
            let (_, format) = settings(&config, format)?;
            cli::list(values, format)
        }
        Command::Range { start, stop, step } => {
            let (_, format) = settings(&config, format)?;
            cli::range(RangeSpec::new(start, stop).with_step(step), format)
        }
        Command::Count { upto } => {
            let (cfg, format) = settings(&config, format)?;
            cli::count(upto.unwrap_or(cfg.count.upto), format)
        }
        Command::Json { input } => {
            let (_, format) = settings(&config, format)?;
            cli::json(&input, format)
        }
    }
}

/// Load config and resolve the output format, preferring `--format`.
fn settings(path: &Path, format: Option<OutputFormat>) -> Result<(CliConfig, OutputFormat)> {
    let cfg = load_config(path)?;
    let format = format.unwrap_or(cfg.output.format);
    debug!(?format, config = %path.display(), "resolved settings");
    Ok((cfg, format))
}
