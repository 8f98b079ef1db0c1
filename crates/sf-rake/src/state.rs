//! Rake status.

use chrono::NaiveDateTime;

/// Whether a rake can take a trip at a given instant.
///
/// Not stored: a rake is in transit exactly while the query instant is
/// before its availability instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RakeStatus {
    Available,
    InTransit,
}

impl RakeStatus {
    #[inline]
    pub fn at(available_at: NaiveDateTime, now: NaiveDateTime) -> Self {
        if available_at <= now { RakeStatus::Available } else { RakeStatus::InTransit }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RakeStatus::Available => "Available",
            RakeStatus::InTransit => "In Transit",
        }
    }
}
