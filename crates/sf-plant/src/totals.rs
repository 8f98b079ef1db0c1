//! Annual input figures.
//!
//! Figures arrive from configuration as numbers or strings.  An empty or
//! absent figure takes its own default.  If any figure is present but not a
//! finite non-negative number, all three fall back to the defaults and a
//! warning is logged.

use serde::Deserialize;

use sf_core::TONNES_PER_MT;

/// Default annual coal intake, Mt.
pub const DEFAULT_COAL_MT: f64 = 10.0;
/// Default annual limestone intake, Mt.
pub const DEFAULT_LIMESTONE_MT: f64 = 4.0;
/// Default annual steel export across all plants, Mt.
pub const DEFAULT_STEEL_MT: f64 = 6.0;

/// A raw configuration figure: `coal = 10.0` or `coal = "10"`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TotalValue {
    Number(f64),
    Text(String),
}

impl From<f64> for TotalValue {
    fn from(x: f64) -> Self {
        TotalValue::Number(x)
    }
}

impl From<&str> for TotalValue {
    fn from(s: &str) -> Self {
        TotalValue::Text(s.to_owned())
    }
}

/// Annual figures in million tonnes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnnualTotals {
    pub coal_mt:      f64,
    pub limestone_mt: f64,
    pub steel_mt:     f64,
}

impl Default for AnnualTotals {
    fn default() -> Self {
        Self {
            coal_mt:      DEFAULT_COAL_MT,
            limestone_mt: DEFAULT_LIMESTONE_MT,
            steel_mt:     DEFAULT_STEEL_MT,
        }
    }
}

/// `Ok(None)` for an empty figure, `Err` for an unusable one.
fn figure(input: Option<&TotalValue>) -> Result<Option<f64>, String> {
    let value = match input {
        None                         => return Ok(None),
        Some(TotalValue::Number(x))  => *x,
        Some(TotalValue::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(TotalValue::Text(s))    => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{s:?} is not a number"))?,
    };
    if !value.is_finite() {
        return Err(format!("{value} is not finite"));
    }
    if value < 0.0 {
        return Err(format!("{value} is negative"));
    }
    Ok(Some(value))
}

impl AnnualTotals {
    /// Resolve raw figures with the fallback rules in the module docs.
    pub fn resolve(
        coal:      Option<&TotalValue>,
        limestone: Option<&TotalValue>,
        steel:     Option<&TotalValue>,
    ) -> Self {
        match Self::try_resolve(coal, limestone, steel) {
            Ok(totals) => totals,
            Err(reason) => {
                tracing::warn!(
                    %reason,
                    "invalid annual totals; using defaults ({DEFAULT_COAL_MT} Mt coal, \
                     {DEFAULT_LIMESTONE_MT} Mt limestone, {DEFAULT_STEEL_MT} Mt steel)"
                );
                Self::default()
            }
        }
    }

    fn try_resolve(
        coal:      Option<&TotalValue>,
        limestone: Option<&TotalValue>,
        steel:     Option<&TotalValue>,
    ) -> Result<Self, String> {
        let defaults = Self::default();
        let coal      = figure(coal).map_err(|e| format!("coal: {e}"))?;
        let limestone = figure(limestone).map_err(|e| format!("limestone: {e}"))?;
        let steel     = figure(steel).map_err(|e| format!("steel: {e}"))?;
        Ok(Self {
            coal_mt:      coal.unwrap_or(defaults.coal_mt),
            limestone_mt: limestone.unwrap_or(defaults.limestone_mt),
            steel_mt:     steel.unwrap_or(defaults.steel_mt),
        })
    }

    /// Parse three text figures, as typed at a prompt.
    pub fn parse(coal: &str, limestone: &str, steel: &str) -> Self {
        Self::resolve(Some(&coal.into()), Some(&limestone.into()), Some(&steel.into()))
    }

    pub fn coal_tonnes(&self) -> f64 {
        self.coal_mt * TONNES_PER_MT
    }

    pub fn limestone_tonnes(&self) -> f64 {
        self.limestone_mt * TONNES_PER_MT
    }

    pub fn steel_tonnes(&self) -> f64 {
        self.steel_mt * TONNES_PER_MT
    }
}
