//! The `Predictor` trait: the seam for delay/cost models.

use crate::PredictResult;

/// Predicted delay and cost for one input row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub delay_hours: f64,
    pub cost:        f64,
}

impl Prediction {
    pub const fn new(delay_hours: f64, cost: f64) -> Self {
        Self { delay_hours, cost }
    }
}

/// A delay/cost regressor over a fixed-length feature vector.
///
/// Implementations must reject a vector of the wrong length with
/// [`PredictError::FeatureLength`][crate::PredictError::FeatureLength]
/// rather than panic.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f32]) -> PredictResult<Prediction>;

    /// Expected feature count, if the model knows it.
    fn input_len(&self) -> Option<usize> {
        None
    }
}
