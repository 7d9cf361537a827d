//! CLI command implementations.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use fizzbuzz::{Bulk, FizzBuzzError, Input, RangeSpec, Scalar, answers};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat, write_config};

/// Answer a single number given as text.
pub fn value(raw: &str) -> Result<()> {
    let scalar: Scalar = raw
        .parse()
        .with_context(|| format!("evaluate {raw:?}"))?;
    debug!(?scalar, "parsed value");
    print_answers(&Input::from(scalar), OutputFormat::Joined)
}

/// Answer each integer of `values` in order.
pub fn list(values: Vec<i64>, format: OutputFormat) -> Result<()> {
    debug!(len = values.len(), "evaluating list");
    print_answers(&Input::from(Bulk::from(values)), format)
}

/// Answer the integers from `start` (inclusive) to `stop` (exclusive).
pub fn range(spec: RangeSpec, format: OutputFormat) -> Result<()> {
    debug!(
        start = spec.start,
        stop = spec.stop,
        step = spec.step,
        "evaluating range"
    );
    print_answers(&Input::from(Bulk::from(spec)), format)
        .with_context(|| format!("evaluate range {}..{} step {}", spec.start, spec.stop, spec.step))
}

/// Answer `1..=upto`.
pub fn count(upto: u32, format: OutputFormat) -> Result<()> {
    range(RangeSpec::new(1, i64::from(upto) + 1), format)
}

/// Answer a JSON number, array of integers, or `{start, stop, step}` object.
pub fn json(raw: &str, format: OutputFormat) -> Result<()> {
    let value: Value = serde_json::from_str(raw).map_err(|err| FizzBuzzError::Type {
        found: format!("malformed JSON ({err})"),
    })?;
    let input = Input::try_from(&value).with_context(|| format!("evaluate {raw}"))?;
    print_answers(&input, format)
}

/// Write the default config file to `path`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    write_config(path, &CliConfig::default())?;
    info!(path = %path.display(), "wrote default config");
    println!("init: config={}", path.display());
    Ok(())
}

fn print_answers(input: &Input, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_answers(&mut out, input, format)?;
    out.flush().context("flush stdout")
}

/// Render `input` to `out` in the requested format.
///
/// Joined output is always one line, empty when there are no answers.
/// Line output writes nothing for an empty sequence.
pub fn write_answers<W: Write>(out: &mut W, input: &Input, format: OutputFormat) -> Result<()> {
    match (format, input) {
        (OutputFormat::Lines, Input::Bulk(bulk)) => {
            for answer in answers(bulk)? {
                writeln!(out, "{answer}").context("write answer")?;
            }
        }
        _ => {
            let joined = input.evaluate()?;
            writeln!(out, "{joined}").context("write answer")?;
        }
    }
    Ok(())
}
