use crate::error::FormatError;
use crate::model::{DEFAULT_DECIMALS, FormatRequest, MAX_DECIMALS, Mode};
use crate::numeric::Numeric;

const BINARY_DIVISOR: f64 = 1024.0;
const DECIMAL_DIVISOR: f64 = 1000.0;

// Binary mode prints `kB`; decimal mode prints `KiB`.
const BINARY_LETTERS: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];
const DECIMAL_LETTERS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

// Above this the scaled value has no fractional bits left to round.
const MAX_ROUNDABLE: f64 = 4_503_599_627_370_496.0;

/// Formats byte counts, grams and meters into human-readable strings.
///
/// Stateless apart from its [`Mode`]; the prefix tables are process-wide
/// constants, so a formatter can be copied freely and shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitFormatter {
    mode: Mode,
}

impl UnitFormatter {
    pub const fn new() -> Self {
        Self { mode: Mode::Compatible }
    }

    pub const fn strict() -> Self {
        Self { mode: Mode::Strict }
    }

    pub const fn with_mode(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Format a byte count, like `ls -h` does.
    ///
    /// `binary` divides by 1024 (`kB`, `MB`, ...); otherwise the divisor is
    /// 1000 and the symbols read `KiB`, `MiB`, .... Values below the divisor
    /// are printed as given with a ` B` suffix. Returns an empty string when
    /// the value cannot be formatted.
    pub fn format_bytes<'a>(&self, value: impl Into<Numeric<'a>>, binary: bool) -> String {
        self.try_format_bytes(value, binary).unwrap_or_default()
    }

    pub fn try_format_bytes<'a>(
        &self,
        value: impl Into<Numeric<'a>>,
        binary: bool,
    ) -> Result<String, FormatError> {
        let value = value.into();
        let number = value.to_f64().ok_or_else(|| FormatError::NotNumeric(value.to_string()))?;
        if number < 0.0 && self.mode == Mode::Strict {
            return Err(FormatError::NegativeBytes(number));
        }

        let divisor = if binary { BINARY_DIVISOR } else { DECIMAL_DIVISOR };
        if number < divisor {
            return Ok(format!("{value} B"));
        }

        let exp = byte_exponent(number, divisor);
        let (letter, suffix) = if binary {
            (BINARY_LETTERS[exp - 1], "")
        } else {
            (DECIMAL_LETTERS[exp - 1], "i")
        };
        let scaled = number / divisor.powi(exp as i32);

        Ok(format!("{} {letter}{suffix}B", fixed(scaled, 1)))
    }

    /// Format a mass in grams with `decimals` fractional digits.
    ///
    /// `bias` multiplies the value first, e.g. `1e3` for an input already in
    /// kilograms. A bias of `1` leaves the value alone.
    pub fn format_grams<'a>(&self, value: impl Into<Numeric<'a>>, decimals: i32, bias: f64) -> String {
        self.format_metric(&FormatRequest::grams(value).decimals(decimals).bias(bias))
    }

    /// Format a length in meters; see [`UnitFormatter::format_grams`].
    pub fn format_meters<'a>(&self, value: impl Into<Numeric<'a>>, decimals: i32, bias: f64) -> String {
        self.format_metric(&FormatRequest::meters(value).decimals(decimals).bias(bias))
    }

    pub fn format_metric(&self, request: &FormatRequest<'_>) -> String {
        self.try_format_metric(request).unwrap_or_default()
    }

    pub fn try_format_metric(&self, request: &FormatRequest<'_>) -> Result<String, FormatError> {
        let decimals = request.decimals.unwrap_or(DEFAULT_DECIMALS);
        if decimals < 0 {
            return Err(FormatError::NegativeDecimals(decimals));
        }
        let mut number = request
            .value
            .to_f64()
            .ok_or_else(|| FormatError::NotNumeric(request.value.to_string()))?;

        if let Some(bias) = request.bias {
            if self.applies_bias(bias) {
                number *= bias;
            }
        }

        let decimals = decimals.min(MAX_DECIMALS);
        let unit = request.unit;
        let (exp, prefix) = unit.prefixes().nearest(raw_exponent(number));
        let scaled = scale_down(number, exp);

        Ok(format!("{} {prefix}{}", fixed(scaled, decimals as usize), unit.symbol()))
    }

    fn applies_bias(&self, bias: f64) -> bool {
        if !bias.is_finite() || bias == 1.0 {
            return false;
        }
        match self.mode {
            Mode::Compatible => bias != 0.0,
            Mode::Strict => true,
        }
    }
}

/// [`UnitFormatter::format_bytes`] with the default formatter.
pub fn format_bytes<'a>(value: impl Into<Numeric<'a>>, binary: bool) -> String {
    UnitFormatter::new().format_bytes(value, binary)
}

/// [`UnitFormatter::format_grams`] with the default formatter.
pub fn format_grams<'a>(value: impl Into<Numeric<'a>>, decimals: i32, bias: f64) -> String {
    UnitFormatter::new().format_grams(value, decimals, bias)
}

/// [`UnitFormatter::format_meters`] with the default formatter.
pub fn format_meters<'a>(value: impl Into<Numeric<'a>>, decimals: i32, bias: f64) -> String {
    UnitFormatter::new().format_meters(value, decimals, bias)
}

/// `floor(log(value) / log(divisor))` for `value >= divisor`, clamped to the
/// largest known prefix.
fn byte_exponent(value: f64, divisor: f64) -> usize {
    let mut exp = (value.ln() / divisor.ln()).floor() as i32;
    // ln rounding can land exact powers of the divisor one tier off
    if divisor.powi(exp + 1) <= value {
        exp += 1;
    } else if divisor.powi(exp) > value {
        exp -= 1;
    }
    (exp.max(1) as usize).min(BINARY_LETTERS.len())
}

/// Decimal magnitude of `value`, truncated toward zero.
fn raw_exponent(value: f64) -> i32 {
    if value == 0.0 { 0 } else { value.abs().log10().trunc() as i32 }
}

fn scale_down(value: f64, exp: i32) -> f64 {
    // 10^n is exact for small n, 10^-n is not
    if exp >= 0 { value / 10f64.powi(exp) } else { value * 10f64.powi(-exp) }
}

/// Fixed-point rendering with `decimals` digits, halves rounded away from zero.
///
/// Infinities print as `Inf`/`-Inf`.
fn fixed(value: f64, decimals: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Inf".to_string() } else { "-Inf".to_string() };
    }
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let shifted = value * factor;
    let rounded = if shifted.is_finite() && shifted.abs() < MAX_ROUNDABLE {
        shifted.round() / factor
    } else {
        value
    };
    format!("{rounded:.decimals$}")
}
