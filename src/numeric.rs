use std::fmt;

/// Raw formatter input: a number, or text that must pass the numeric check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl Numeric<'_> {
    /// The value as `f64`, or `None` when it is not numeric.
    ///
    /// Non-finite floats are rejected, as are strings that do not read as a
    /// plain decimal literal (see [`parse_numeric`]).
    pub fn to_f64(&self) -> Option<f64> {
        match *self {
            Numeric::Int(value) => Some(value as f64),
            Numeric::Float(value) => value.is_finite().then_some(value),
            Numeric::Text(text) => parse_numeric(text),
        }
    }
}

impl fmt::Display for Numeric<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(value) => write!(f, "{value}"),
            Numeric::Float(value) => write!(f, "{value}"),
            Numeric::Text(text) => f.write_str(trim_numeric_whitespace(text)),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Numeric<'_> {
                fn from(value: $ty) -> Self {
                    Numeric::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Numeric<'_> {
    fn from(value: u64) -> Self {
        i64::try_from(value).map(Numeric::Int).unwrap_or(Numeric::Float(value as f64))
    }
}

impl From<usize> for Numeric<'_> {
    fn from(value: usize) -> Self {
        Numeric::from(value as u64)
    }
}

impl From<f32> for Numeric<'_> {
    fn from(value: f32) -> Self {
        Numeric::Float(f64::from(value))
    }
}

impl From<f64> for Numeric<'_> {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl<'a> From<&'a str> for Numeric<'a> {
    fn from(value: &'a str) -> Self {
        Numeric::Text(value)
    }
}

impl<'a> From<&'a String> for Numeric<'a> {
    fn from(value: &'a String) -> Self {
        Numeric::Text(value.as_str())
    }
}

/// Parse `text` as a finite number.
///
/// Accepts optional surrounding whitespace, an optional sign, digits with an
/// optional fractional part (`1`, `1.`, `.5`, `1.5`) and an optional exponent
/// (`1e3`, `2.5E-4`). Hex, `inf`, `nan` and values overflowing `f64` are not
/// numeric.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let literal = trim_numeric_whitespace(text);
    if !is_decimal_literal(literal) {
        return None;
    }
    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn trim_numeric_whitespace(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'))
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_literals() {
        assert_eq!(parse_numeric("2048"), Some(2048.0));
        assert_eq!(parse_numeric("-12.5"), Some(-12.5));
        assert_eq!(parse_numeric("+3"), Some(3.0));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("1."), Some(1.0));
        assert_eq!(parse_numeric("1.12589990684263e+15"), Some(1.12589990684263e15));
        assert_eq!(parse_numeric("2E-3"), Some(0.002));
        assert_eq!(parse_numeric(" \t42\n"), Some(42.0));
    }

    #[test]
    fn rejects_everything_else() {
        for text in ["", " ", "ThisIsAString", ".", "-", "1e", "1e+", "e5", "0x1A", "inf", "NaN", "1,5", "1 000", "1e999"] {
            assert_eq!(parse_numeric(text), None, "{text:?} should not be numeric");
        }
    }

    #[test]
    fn non_finite_floats_are_not_numeric() {
        assert_eq!(Numeric::Float(f64::NAN).to_f64(), None);
        assert_eq!(Numeric::Float(f64::INFINITY).to_f64(), None);
        assert_eq!(Numeric::Float(-0.5).to_f64(), Some(-0.5));
    }

    #[test]
    fn display_keeps_the_literal() {
        assert_eq!(Numeric::from(12).to_string(), "12");
        assert_eq!(Numeric::from(1.5).to_string(), "1.5");
        assert_eq!(Numeric::from(0.0).to_string(), "0");
        assert_eq!(Numeric::from(" 1e2 ").to_string(), "1e2");
    }

    #[test]
    fn large_unsigned_values_fall_back_to_float() {
        assert_eq!(Numeric::from(u64::MAX), Numeric::Float(u64::MAX as f64));
        assert_eq!(Numeric::from(7u64), Numeric::Int(7));
    }
}
