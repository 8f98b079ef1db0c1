//! One port's storage and its daily step.

use sf_core::{Material, SimRng};

use crate::{CeilingLedger, PortPolicy};

/// A scheduled movement of one material through the port.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Movement {
    pub material: Material,
    pub quantity: f64,
}

/// Tonnages for one port-day, indexed by `Material::index()`.
///
/// `departed` is the shipped column for steel.  For every material
/// `eod = bod + arrived − departed`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DayFlows {
    pub bod:      [f64; 3],
    pub arrived:  [f64; 3],
    pub departed: [f64; 3],
    pub eod:      [f64; 3],
}

impl DayFlows {
    /// Everything that moved in or out today.
    pub fn total_flow(&self) -> f64 {
        self.arrived.iter().sum::<f64>() + self.departed.iter().sum::<f64>()
    }
}

/// Storage state of one port.
#[derive(Clone, Debug)]
pub struct PortYard {
    pub name: String,
    storage:  [f64; 3],
    ledger:   CeilingLedger,
}

impl PortYard {
    /// Empty yard.
    pub fn new(name: impl Into<String>, ledger: CeilingLedger) -> Self {
        Self { name: name.into(), storage: [0.0; 3], ledger }
    }

    /// Yard with opening stock, clamped to `[0, max_storage]`.
    pub fn with_storage(
        name:    impl Into<String>,
        ledger:  CeilingLedger,
        storage: [f64; 3],
        policy:  &PortPolicy,
    ) -> Self {
        let mut yard = Self::new(name, ledger);
        for m in Material::ALL {
            yard.storage[m.index()] = storage[m.index()].clamp(0.0, policy.get(m).max_storage);
        }
        yard
    }

    #[inline]
    pub fn storage(&self, material: Material) -> f64 {
        self.storage[material.index()]
    }

    #[inline]
    pub fn ledger(&self) -> &CeilingLedger {
        &self.ledger
    }

    /// Inject raw material up to the ceiling allowance and the free room.
    /// Returns the injected tonnage.
    fn inject(&mut self, material: Material, policy: &PortPolicy, rng: &mut SimRng) -> f64 {
        let allowance = self.ledger.allowance(material);
        if allowance <= 0.0 {
            return 0.0;
        }
        let p = policy.get(material);
        let room = p.max_storage - self.storage[material.index()];
        let quantity = rng.uniform(p.range.0, p.range.1).min(allowance).min(room);
        if quantity <= 0.0 {
            return 0.0;
        }
        self.storage[material.index()] += quantity;
        self.ledger.record(material, quantity);
        quantity
    }

    /// Advance one day.
    ///
    /// 1. departures: a raw-material departure larger than storage first gets
    ///    a catch-up injection; then `min(quantity, storage)` leaves;
    /// 2. arrivals: stored up to capacity, the excess passes through; raw
    ///    material arrivals count against the ceiling;
    /// 3. coal/limestone below trigger: replenishment injection;
    /// 4. steel at or above trigger (and the range minimum) ships
    ///    `min(U(range), storage)`; on `last_day` all steel ships.
    pub fn step(
        &mut self,
        departures: &[Movement],
        arrivals:   &[Movement],
        last_day:   bool,
        policy:     &PortPolicy,
        rng:        &mut SimRng,
    ) -> DayFlows {
        let mut flows = DayFlows { bod: self.storage, ..DayFlows::default() };

        for m in departures {
            let i = m.material.index();
            if m.material != Material::Steel && self.storage[i] < m.quantity {
                flows.arrived[i] += self.inject(m.material, policy, rng);
            }
            let out = m.quantity.min(self.storage[i]).max(0.0);
            self.storage[i] -= out;
            flows.departed[i] += out;
        }

        for m in arrivals {
            let i = m.material.index();
            let room = (policy.get(m.material).max_storage - self.storage[i]).max(0.0);
            let kept = m.quantity.min(room).max(0.0);
            self.storage[i] += kept;
            if m.material != Material::Steel {
                self.ledger.record_arrival(m.material, m.quantity);
            }
            flows.arrived[i] += m.quantity;
            flows.departed[i] += m.quantity - kept;
        }

        for material in Material::RAW {
            if self.storage[material.index()] < policy.get(material).trigger {
                flows.arrived[material.index()] += self.inject(material, policy, rng);
            }
        }

        let s = Material::Steel.index();
        let steel = &policy.steel;
        let shipment = if last_day {
            self.storage[s]
        } else if self.storage[s] >= steel.trigger && self.storage[s] >= steel.range.0 {
            rng.uniform(steel.range.0, steel.range.1).min(self.storage[s])
        } else {
            0.0
        };
        if shipment > 0.0 {
            self.storage[s] -= shipment;
            flows.departed[s] += shipment;
        }

        flows.eod = self.storage;
        flows
    }
}
