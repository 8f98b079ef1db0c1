//! A predictor wrapper that always answers.

use std::path::Path;

use crate::{LinearPredictor, Prediction, Predictor};

/// Which model a [`SafePredictor`] stands in for; selects the fallbacks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModelKind {
    Port,
    Rail,
}

impl ModelKind {
    /// Returned when no model is loaded.
    pub fn unloaded(self) -> Prediction {
        match self {
            ModelKind::Port => Prediction::new(10.0, 350.0),
            ModelKind::Rail => Prediction::new(8.0, 450.0),
        }
    }

    /// Returned when a loaded model fails on an input.
    pub fn runtime_error(self) -> Prediction {
        match self {
            ModelKind::Port => Prediction::new(12.0, 400.0),
            ModelKind::Rail => Prediction::new(9.5, 500.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Port => "port",
            ModelKind::Rail => "rail",
        }
    }
}

/// Wraps an optional model; [`predict`][Self::predict] never fails.
pub struct SafePredictor {
    kind:  ModelKind,
    model: Option<Box<dyn Predictor>>,
}

impl SafePredictor {
    pub fn new(kind: ModelKind, model: Option<Box<dyn Predictor>>) -> Self {
        Self { kind, model }
    }

    pub fn unloaded(kind: ModelKind) -> Self {
        Self::new(kind, None)
    }

    /// Load a [`LinearPredictor`] from `path`.  A missing path or a load
    /// failure leaves the predictor unloaded with a warning.
    pub fn load(kind: ModelKind, path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::warn!(model = kind.as_str(), "no model weights given; using fallback predictions");
            return Self::unloaded(kind);
        };
        match LinearPredictor::load(path) {
            Ok(model) => Self::new(kind, Some(Box::new(model))),
            Err(e) => {
                tracing::warn!(model = kind.as_str(), error = %e, "model failed to load; using fallback predictions");
                Self::unloaded(kind)
            }
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn predict(&self, features: &[f32]) -> Prediction {
        let Some(model) = &self.model else {
            return self.kind.unloaded();
        };
        match model.predict(features) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(model = self.kind.as_str(), error = %e, "prediction failed; using fallback");
                self.kind.runtime_error()
            }
        }
    }
}

impl std::fmt::Debug for SafePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafePredictor")
            .field("kind", &self.kind)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
