//! Human-readable byte sizes, grams and meters.
//!
//! ```
//! assert_eq!(unitfmt::format_bytes(2048, true), "2.0 kB");
//! assert_eq!(unitfmt::format_bytes(2048, false), "2.0 KiB");
//! assert_eq!(unitfmt::format_grams(0.0001, 2, 1.0), "100.00 µg");
//! assert_eq!(unitfmt::format_meters("2.5", 2, 1e3), "2.50 Km");
//! ```

pub mod commands;
pub mod config;
pub mod error;
#[cfg(feature = "tera")]
pub mod filters;
pub mod format;
pub mod model;
pub mod numeric;
pub mod prefix;
pub mod utils;

pub use error::FormatError;
pub use format::{UnitFormatter, format_bytes, format_grams, format_meters};
pub use model::{DEFAULT_DECIMALS, FormatRequest, MAX_DECIMALS, Mode, UnitKind};
pub use numeric::Numeric;
