use rand::rngs::StdRng;
use rw_core::wearer::Roster;

use crate::clock::SimClock;
use crate::event::{EventLog, SimEvent, SimEventKind};

/// Mutable context passed to each system during a tick.
pub struct SimContext<'a> {
    /// The wearer roster being simulated.
    pub roster: &'a mut Roster,
    /// The simulation clock (read-only during a tick).
    pub clock: &'a SimClock,
    /// The event log to record into.
    pub events: &'a mut EventLog,
    /// Seeded RNG shared by all systems.
    pub rng: &'a mut StdRng,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.tick(), kind, description));
    }

    /// The current tick number.
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    /// In-world seconds represented by one tick.
    pub fn seconds_per_tick(&self) -> f64 {
        self.clock.seconds_per_tick()
    }
}
