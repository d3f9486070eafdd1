use std::io;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, FormatError};
use crate::format::UnitFormatter;
use crate::model::{FormatRequest, UnitKind};
use crate::numeric::Numeric;
use crate::utils::read_values;

/// What the values are formatted as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// `None` falls back to the configured base.
    Bytes { binary: Option<bool> },
    Metric { unit: UnitKind, decimals: Option<i32>, bias: Option<f64> },
}

pub struct FormatOptions {
    pub target: Target,
    /// Read from stdin when empty.
    pub values: Vec<String>,
    pub strict: bool,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedValue {
    pub input: String,
    pub output: Option<String>,
}

pub fn execute_format(options: FormatOptions) -> Result<Vec<FormattedValue>, AppError> {
    let config = Config::load()?;
    let formatter = if options.strict { UnitFormatter::strict() } else { config.formatter() };

    let values = if options.values.is_empty() {
        debug!("no values given, reading stdin");
        read_values(io::stdin().lock())?
    } else {
        options.values
    };
    debug!(count = values.len(), target = ?options.target, mode = ?formatter.mode(), "formatting");

    let results: Vec<FormattedValue> = values
        .into_iter()
        .map(|input| {
            let output = match format_value(&formatter, &config, options.target, &input) {
                Ok(formatted) => Some(formatted),
                Err(err) => {
                    warn!(%input, "{err}");
                    None
                }
            };
            FormattedValue { input, output }
        })
        .collect();

    print_results(&results, options.json)?;
    Ok(results)
}

fn format_value(
    formatter: &UnitFormatter,
    config: &Config,
    target: Target,
    input: &str,
) -> Result<String, FormatError> {
    match target {
        Target::Bytes { binary } => {
            formatter.try_format_bytes(input, binary.unwrap_or(config.binary))
        }
        Target::Metric { unit, decimals, bias } => {
            let request = FormatRequest {
                value: Numeric::from(input),
                decimals: Some(decimals.unwrap_or(config.decimals)),
                bias,
                unit,
            };
            formatter.try_format_metric(&request)
        }
    }
}

fn print_results(results: &[FormattedValue], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for result in results {
            println!("{}", result.output.as_deref().unwrap_or_default());
        }
    }
    Ok(())
}
