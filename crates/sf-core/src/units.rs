//! Tonnage units and display rounding.
//!
//! Every quantity written to a stage table carries two decimals.  Rounding is
//! applied at the point a value is recorded, never to running totals.

/// Tonnes in one million tonnes (Mt), the unit of annual plant figures.
pub const TONNES_PER_MT: f64 = 1_000_000.0;

/// Round to two decimal places (half away from zero).
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
