//! Linear regressor with two outputs (delay hours, cost).

use std::path::Path;

use serde::Deserialize;

use crate::{PredictError, PredictResult, Prediction, Predictor};

/// `output[k] = bias[k] + Σ weights[k][i] · x[i]` for `k ∈ {delay, cost}`.
///
/// File format: `{"weights": [[..], [..]], "bias": [b0, b1]}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LinearPredictor {
    weights: [Vec<f64>; 2],
    bias:    [f64; 2],
}

impl LinearPredictor {
    pub fn new(weights: [Vec<f64>; 2], bias: [f64; 2]) -> PredictResult<Self> {
        let model = Self { weights, bias };
        model.check_shape()?;
        Ok(model)
    }

    pub fn from_json(text: &str, path: &Path) -> PredictResult<Self> {
        let model: Self = serde_json::from_str(text)
            .map_err(|source| PredictError::Json { path: path.to_owned(), source })?;
        model.check_shape()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> PredictResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| PredictError::Io { path: path.to_owned(), source })?;
        let model = Self::from_json(&text, path)?;
        tracing::info!(path = %path.display(), features = model.weights[0].len(), "linear model loaded");
        Ok(model)
    }

    fn check_shape(&self) -> PredictResult<()> {
        let [delay, cost] = &self.weights;
        if delay.len() != cost.len() {
            return Err(PredictError::Shape(format!(
                "weight rows differ in length ({} vs {})",
                delay.len(),
                cost.len()
            )));
        }
        if delay.is_empty() {
            return Err(PredictError::Shape("weight rows are empty".into()));
        }
        Ok(())
    }

    fn dot(row: &[f64], bias: f64, x: &[f32]) -> f64 {
        row.iter().zip(x).fold(bias, |acc, (w, &v)| acc + w * f64::from(v))
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, features: &[f32]) -> PredictResult<Prediction> {
        let expected = self.weights[0].len();
        if features.len() != expected {
            return Err(PredictError::FeatureLength { expected, got: features.len() });
        }
        let delay = Self::dot(&self.weights[0], self.bias[0], features);
        let cost = Self::dot(&self.weights[1], self.bias[1], features);
        if !delay.is_finite() || !cost.is_finite() {
            return Err(PredictError::NonFinite);
        }
        Ok(Prediction::new(delay, cost))
    }

    fn input_len(&self) -> Option<usize> {
        Some(self.weights[0].len())
    }
}
