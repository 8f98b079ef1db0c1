//! `sf-pipeline`: runs the steelflow stages in order.
//!
//! # Stage chain
//!
//! ```text
//! plants ──► trains ──► ports ──► vessels
//!                         │          ▲
//! tariffs (static)        │   contracts (static)
//! ```
//!
//! Every stage reads its inputs from the output directory with the validated
//! loader and writes its table there before the next stage starts, so a
//! single stage can be re-run on its own.  Each stage owns an RNG derived
//! from the master seed in a fixed order; a stage run alone draws exactly
//! the numbers it draws inside a full run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sf_pipeline::{PipelineBuilder, PipelineConfig, TracingObserver};
//!
//! let config = PipelineConfig::load(Path::new("steelflow.toml"))?;
//! let mut pipeline = PipelineBuilder::new(config).build()?;
//! pipeline.run(&mut TracingObserver::default())?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod stage;


pub use builder::PipelineBuilder;
pub use config::{BackendsConfig, PipelineConfig, TotalsConfig};
pub use error::{PipelineError, PipelineResult};
pub use observer::{NoopObserver, StageObserver, TracingObserver};
pub use pipeline::{Pipeline, StageReport};
pub use stage::Stage;
