//! Tera filters `format_bytes`, `format_grams` and `format_meters`.
//!
//! ```text
//! {{ size | format_bytes }}                  -> 2.0 kB
//! {{ size | format_bytes(binary=false) }}    -> 2.0 KiB
//! {{ weight | format_grams(decimals=1) }}    -> 2.5 Kg
//! {{ length | format_meters(bias=0.001) }}   -> 1.00 mm
//! ```
//!
//! Values that are not numeric render as an empty string. Arguments of the
//! wrong type are template errors.

use std::collections::HashMap;

use tera::{Error, Filter, Result, Tera, Value};
use tracing::debug;

use crate::format::UnitFormatter;
use crate::model::{FormatRequest, UnitKind};
use crate::numeric::Numeric;

pub fn register_filters(tera: &mut Tera) {
    register_filters_with(tera, UnitFormatter::new());
}

pub fn register_filters_with(tera: &mut Tera, formatter: UnitFormatter) {
    tera.register_filter("format_bytes", BytesFilter { formatter });
    tera.register_filter("format_grams", MetricFilter { formatter, unit: UnitKind::Gram });
    tera.register_filter("format_meters", MetricFilter { formatter, unit: UnitKind::Meter });
}

pub struct BytesFilter {
    formatter: UnitFormatter,
}

impl Filter for BytesFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
        let binary = match args.get("binary") {
            None | Some(Value::Null) => true,
            Some(arg) => arg
                .as_bool()
                .ok_or_else(|| invalid_argument("format_bytes", "binary", "a boolean", arg))?,
        };

        let Some(numeric) = template_numeric(value) else {
            debug!(filter = "format_bytes", %value, "not a numeric value");
            return Ok(Value::String(String::new()));
        };
        Ok(Value::String(self.formatter.format_bytes(numeric, binary)))
    }
}

pub struct MetricFilter {
    formatter: UnitFormatter,
    unit: UnitKind,
}

impl MetricFilter {
    fn name(&self) -> &'static str {
        match self.unit {
            UnitKind::Gram => "format_grams",
            UnitKind::Meter => "format_meters",
        }
    }
}

impl Filter for MetricFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
        let decimals = match args.get("decimals") {
            None | Some(Value::Null) => None,
            Some(arg) => Some(
                arg.as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| invalid_argument(self.name(), "decimals", "an integer", arg))?,
            ),
        };
        let bias = match args.get("bias") {
            None | Some(Value::Null) => None,
            Some(arg) => Some(
                arg.as_f64().ok_or_else(|| invalid_argument(self.name(), "bias", "a number", arg))?,
            ),
        };

        let Some(numeric) = template_numeric(value) else {
            debug!(filter = self.name(), %value, "not a numeric value");
            return Ok(Value::String(String::new()));
        };
        let request = FormatRequest { value: numeric, decimals, bias, unit: self.unit };
        Ok(Value::String(self.formatter.format_metric(&request)))
    }
}

fn template_numeric(value: &Value) -> Option<Numeric<'_>> {
    match value {
        Value::Number(n) => n.as_i64().map(Numeric::Int).or_else(|| n.as_f64().map(Numeric::Float)),
        Value::String(text) => Some(Numeric::Text(text.as_str())),
        _ => None,
    }
}

fn invalid_argument(filter: &str, arg: &str, expected: &str, got: &Value) -> Error {
    Error::msg(format!("Filter `{filter}` expected `{arg}` to be {expected}, got `{got}`"))
}
