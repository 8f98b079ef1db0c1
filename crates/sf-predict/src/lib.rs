//! `sf-predict`: delay and cost predictions for trips and vessel calls.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`model`]    | `Predictor` trait, `Prediction`                              |
//! | [`linear`]   | `LinearPredictor`: JSON weights, two outputs                |
//! | [`safe`]     | `SafePredictor`: never fails, fixed fallbacks per model     |
//! | [`encode`]   | `LabelEncoder`: sorted distinct values → integer codes      |
//! | [`features`] | Rail (15) and port (10) feature vectors                      |
//! | [`score`]    | Train log → `TrainPredictionRow`s, vessel history → `VesselPredictionRow`s |
//! | [`error`]    | `PredictError`, `PredictResult<T>`                           |
//!
//! # Plugging in a model
//!
//! ```rust,ignore
//! let model = LinearPredictor::load(Path::new("rail_weights.json"))?;
//! let rail = SafePredictor::new(ModelKind::Rail, Some(Box::new(model)));
//! let rows = score_trains(&trips, &rail);
//! ```
//!
//! Any type implementing [`Predictor`] can stand in for the linear model.

pub mod encode;
pub mod error;
pub mod features;
pub mod linear;
pub mod model;
pub mod safe;
pub mod score;

#[cfg(test)]
mod tests;

pub use encode::LabelEncoder;
pub use error::{PredictError, PredictResult};
pub use features::{PORT_FEATURES, PortFeatureEncoder, RAIL_FEATURES, RailFeatureEncoder};
pub use linear::LinearPredictor;
pub use model::{Prediction, Predictor};
pub use safe::{ModelKind, SafePredictor};
pub use score::{TrainPredictionRow, VesselPredictionRow, score_trains, score_vessels};
