use crate::numeric::Numeric;
use crate::prefix::{GRAM_PREFIXES, METER_PREFIXES, PrefixTable};

/// Precision used by the metric formatters when none is given.
pub const DEFAULT_DECIMALS: i32 = 2;

/// Larger precisions are clamped to this many fractional digits.
pub const MAX_DECIMALS: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    Gram,
    Meter,
}

impl UnitKind {
    /// Unit letter appended after the prefix.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitKind::Gram => "g",
            UnitKind::Meter => "m",
        }
    }

    pub fn prefixes(&self) -> &'static PrefixTable {
        match self {
            UnitKind::Gram => &GRAM_PREFIXES,
            UnitKind::Meter => &METER_PREFIXES,
        }
    }
}

/// How the formatter treats inputs whose handling is ambiguous.
///
/// `Compatible` keeps a bias of `0` as a no-op and passes negative byte counts
/// through unscaled. `Strict` scales by a `0` bias and rejects negative byte
/// counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Compatible,
    Strict,
}

impl Mode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Mode::Strict } else { Mode::Compatible }
    }
}

/// One metric formatting call: value, precision, bias and unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatRequest<'a> {
    pub value: Numeric<'a>,
    /// `None` means [`DEFAULT_DECIMALS`].
    pub decimals: Option<i32>,
    /// `None` means the value is taken as-is.
    pub bias: Option<f64>,
    pub unit: UnitKind,
}

impl<'a> FormatRequest<'a> {
    pub fn new(value: impl Into<Numeric<'a>>, unit: UnitKind) -> Self {
        Self { value: value.into(), decimals: None, bias: None, unit }
    }

    pub fn grams(value: impl Into<Numeric<'a>>) -> Self {
        Self::new(value, UnitKind::Gram)
    }

    pub fn meters(value: impl Into<Numeric<'a>>) -> Self {
        Self::new(value, UnitKind::Meter)
    }

    pub fn decimals(mut self, decimals: i32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = Some(bias);
        self
    }
}
