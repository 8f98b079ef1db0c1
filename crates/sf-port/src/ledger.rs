//! Scheduled ceilings.
//!
//! The ceiling for a port and material is the tonnage the train log
//! schedules to depart from that port over the whole run.  Raw material
//! received by the port, whether by rail or by policy injection, is recorded
//! against it.  Injections are bounded by what is left, so once the
//! received total reaches the ceiling the port receives nothing but trips.

use sf_core::Material;
use sf_table::TripRow;

/// Ceilings and receipts for one port.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CeilingLedger {
    ceiling:  [f64; 3],
    received: [f64; 3],
}

impl CeilingLedger {
    /// Ledger with explicit ceilings and nothing received.
    pub fn new(ceiling: [f64; 3]) -> Self {
        Self { ceiling, received: [0.0; 3] }
    }

    /// Sum of trip quantities leaving `port`, per material.
    pub fn from_trips(port: &str, trips: &[TripRow]) -> Self {
        let mut ceiling = [0.0; 3];
        for t in trips.iter().filter(|t| t.source == port) {
            ceiling[t.material.index()] += t.quantity_tonnes;
        }
        Self::new(ceiling)
    }

    #[inline]
    pub fn ceiling(&self, material: Material) -> f64 {
        self.ceiling[material.index()]
    }

    #[inline]
    pub fn received(&self, material: Material) -> f64 {
        self.received[material.index()]
    }

    /// Tonnage policy may still inject.  Zero once rail arrivals alone
    /// reach the ceiling.
    #[inline]
    pub fn allowance(&self, material: Material) -> f64 {
        (self.ceiling(material) - self.received(material)).max(0.0)
    }

    /// Record a scheduled rail arrival.  Trips are never refused, so this may
    /// take `received` past the ceiling.
    pub fn record_arrival(&mut self, material: Material, quantity: f64) {
        self.received[material.index()] += quantity;
    }

    /// Record a policy injection.  `quantity` must not exceed the allowance.
    pub fn record(&mut self, material: Material, quantity: f64) {
        debug_assert!(quantity <= self.allowance(material) + 1e-6);
        self.received[material.index()] += quantity;
    }
}
