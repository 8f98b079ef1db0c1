//! The stage enumeration.

use std::fmt;
use std::str::FromStr;

use sf_core::SimRng;

use crate::PipelineError;

/// One pipeline stage, named as on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Plants,
    Trains,
    Ports,
    Tariffs,
    Contracts,
    Vessels,
}

impl Stage {
    /// Execution order of a full run.
    pub const ALL: [Stage; 6] = [
        Stage::Plants,
        Stage::Trains,
        Stage::Ports,
        Stage::Tariffs,
        Stage::Contracts,
        Stage::Vessels,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Plants    => "plants",
            Stage::Trains    => "trains",
            Stage::Ports     => "ports",
            Stage::Tariffs   => "tariffs",
            Stage::Contracts => "contracts",
            Stage::Vessels   => "vessels",
        }
    }

    /// Position in [`Stage::ALL`].
    pub fn index(self) -> usize {
        match self {
            Stage::Plants    => 0,
            Stage::Trains    => 1,
            Stage::Ports     => 2,
            Stage::Tariffs   => 3,
            Stage::Contracts => 4,
            Stage::Vessels   => 5,
        }
    }

    /// This stage's RNG under master `seed`.
    ///
    /// Children are always derived in [`Stage::ALL`] order from a fresh root,
    /// so the result does not depend on which stages were run before.
    pub fn rng(self, seed: u64) -> SimRng {
        let mut root = SimRng::new(seed);
        for earlier in &Stage::ALL[..self.index()] {
            let _ = root.child(earlier.index() as u64 + 1);
        }
        root.child(self.index() as u64 + 1)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PipelineError::UnknownStage(s.to_owned()))
    }
}
