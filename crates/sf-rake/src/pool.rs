//! The `RakePool`: per-rake location and availability.
//!
//! # Data layout
//!
//! Struct-of-arrays indexed by `RakeId`, fixed length for the life of a run:
//!
//! | Field          | Meaning                                         |
//! |----------------|-------------------------------------------------|
//! | `numbers`      | public six-digit rake number                    |
//! | `locations`    | where the rake is, or will be once it arrives   |
//! | `available_at` | instant the rake finishes its current trip      |
//!
//! # Assignment policy
//!
//! For a trip leaving `source` at `desired`:
//!
//! 1. a rake at `source` with `available_at ≤ desired`, uniform among ties;
//! 2. else any rake with `available_at ≤ desired`, uniform among ties;
//! 3. else the rake with the earliest `available_at` (lowest slot on ties),
//!    and the departure is deferred to that instant.
//!
//! The availability index is `rakes_free_at_source / pool_size × 10`.

use chrono::NaiveDateTime;
use rand::seq::index;

use sf_core::{LocationId, RakeId, SimRng, round2};
use sf_network::Network;

use crate::{RakeStatus, TransportError, TransportResult};

/// Lowest six-digit rake number.
const FIRST_RAKE_NUMBER: u32 = 100_000;
/// Count of six-digit rake numbers.
const RAKE_NUMBER_SPAN: usize = 900_000;

/// Outcome of [`RakePool::assign`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RakeAssignment {
    pub rake:               RakeId,
    /// Departure after deferral; `≥ desired`.
    pub departure:          NaiveDateTime,
    /// `true` when no rake was free at the desired departure.
    pub deferred:           bool,
    pub availability_index: f64,
}

/// Every rake of a transport run.
#[derive(Clone, Debug)]
pub struct RakePool {
    numbers:      Vec<u32>,
    locations:    Vec<LocationId>,
    available_at: Vec<NaiveDateTime>,
}

impl RakePool {
    /// `size` rakes with distinct random numbers, each at a uniformly random
    /// network location and available from the beginning of time.
    pub fn new(size: usize, network: &Network, rng: &mut SimRng) -> TransportResult<Self> {
        if size == 0 || network.location_count() == 0 {
            return Err(TransportError::EmptyPool);
        }
        if size > RAKE_NUMBER_SPAN {
            return Err(TransportError::InvalidParams(format!(
                "pool of {size} rakes exceeds the {RAKE_NUMBER_SPAN} six-digit rake numbers"
            )));
        }
        let numbers: Vec<u32> = index::sample(rng.inner(), RAKE_NUMBER_SPAN, size)
            .into_iter()
            .map(|i| FIRST_RAKE_NUMBER + i as u32)
            .collect();
        let locations: Vec<LocationId> = (0..size)
            .map(|_| LocationId(rng.gen_range(0..network.location_count()) as u16))
            .collect();
        Ok(Self {
            numbers,
            locations,
            available_at: vec![NaiveDateTime::MIN; size],
        })
    }

    /// Pool with explicit rake positions, all available from the beginning of
    /// time.  Rake numbers are `100000, 100001, …`.
    pub fn with_locations(locations: Vec<LocationId>) -> TransportResult<Self> {
        if locations.is_empty() {
            return Err(TransportError::EmptyPool);
        }
        let size = locations.len();
        Ok(Self {
            numbers: (0..size).map(|i| FIRST_RAKE_NUMBER + i as u32).collect(),
            locations,
            available_at: vec![NaiveDateTime::MIN; size],
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    #[inline]
    pub fn number(&self, rake: RakeId) -> u32 {
        self.numbers[rake.index()]
    }

    #[inline]
    pub fn location(&self, rake: RakeId) -> LocationId {
        self.locations[rake.index()]
    }

    #[inline]
    pub fn available_at(&self, rake: RakeId) -> NaiveDateTime {
        self.available_at[rake.index()]
    }

    #[inline]
    pub fn status(&self, rake: RakeId, now: NaiveDateTime) -> RakeStatus {
        RakeStatus::at(self.available_at[rake.index()], now)
    }

    pub fn rake_ids(&self) -> impl Iterator<Item = RakeId> {
        (0..self.numbers.len()).map(|i| RakeId(i as u32))
    }

    /// Rakes free at `now`.
    pub fn available_count(&self, now: NaiveDateTime) -> usize {
        self.available_at.iter().filter(|&&t| t <= now).count()
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Pick a rake for a trip leaving `source` at `desired`.  Does not mutate
    /// the pool; follow with [`dispatch`][Self::dispatch].
    pub fn assign(
        &self,
        source:  LocationId,
        desired: NaiveDateTime,
        rng:     &mut SimRng,
    ) -> TransportResult<RakeAssignment> {
        let local: Vec<RakeId> = self
            .rake_ids()
            .filter(|&r| self.locations[r.index()] == source && self.available_at[r.index()] <= desired)
            .collect();
        let availability_index = round2(local.len() as f64 / self.len() as f64 * 10.0);

        if let Some(&rake) = rng.choose(&local) {
            return Ok(RakeAssignment { rake, departure: desired, deferred: false, availability_index });
        }

        let anywhere: Vec<RakeId> = self
            .rake_ids()
            .filter(|&r| self.available_at[r.index()] <= desired)
            .collect();
        if let Some(&rake) = rng.choose(&anywhere) {
            return Ok(RakeAssignment { rake, departure: desired, deferred: false, availability_index });
        }

        let rake = self
            .rake_ids()
            .min_by_key(|&r| self.available_at[r.index()])
            .ok_or(TransportError::EmptyPool)?;
        Ok(RakeAssignment {
            rake,
            departure: self.available_at[rake.index()],
            deferred: true,
            availability_index,
        })
    }

    /// Commit a trip: the rake ends up at `destination`, free from `arrival`.
    ///
    /// This is the only way rake state changes after construction.
    pub fn dispatch(&mut self, rake: RakeId, destination: LocationId, arrival: NaiveDateTime) {
        let i = rake.index();
        debug_assert!(arrival >= self.available_at[i], "rake {rake} dispatched into its own trip");
        self.locations[i] = destination;
        self.available_at[i] = arrival;
    }
}
