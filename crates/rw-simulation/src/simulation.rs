use rand::SeedableRng;
use rand::rngs::StdRng;
use rw_core::wearer::{Roster, WearerId};

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::SimContext;
use crate::error::{SimError, SimResult};
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::system::System;

/// The top-level simulation orchestrator.
///
/// Owns the roster, clock, RNG, event log, and registered systems.
/// Drives the tick loop: systems run in registration order, each with a
/// mutable [`SimContext`].
pub struct Simulation {
    roster: Roster,
    clock: SimClock,
    rng: StdRng,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
    initialized: bool,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("systems", &self.systems.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create a new simulation from a roster and configuration.
    pub fn new(roster: Roster, config: SimConfig) -> Self {
        let clock = SimClock::new(config.seconds_per_tick);
        let rng = StdRng::seed_from_u64(config.seed);
        let events = EventLog::new(config.max_events);
        Self {
            roster,
            clock,
            rng,
            events,
            systems: Vec::new(),
            initialized: false,
        }
    }

    /// Register a system. Systems are ticked in registration order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Initialize all registered systems.
    pub fn init(&mut self) -> SimResult<()> {
        if self.initialized {
            return Ok(());
        }
        for i in 0..self.systems.len() {
            let mut system = std::mem::replace(&mut self.systems[i], Box::new(NoopSystem));
            let mut ctx = SimContext {
                roster: &mut self.roster,
                clock: &self.clock,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            system.init(&mut ctx)?;
            self.systems[i] = system;
        }
        self.initialized = true;
        Ok(())
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> SimResult<()> {
        if !self.initialized {
            self.init()?;
        }

        self.clock.advance();

        for i in 0..self.systems.len() {
            let mut system = std::mem::replace(&mut self.systems[i], Box::new(NoopSystem));
            let mut ctx = SimContext {
                roster: &mut self.roster,
                clock: &self.clock,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            system.tick(&mut ctx)?;
            self.systems[i] = system;
        }
        Ok(())
    }

    /// Advance the simulation by `n` ticks.
    pub fn run(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// The roster being simulated.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable access to the roster between ticks.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// The simulation clock.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The recorded event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Access a system by downcasting to a concrete type.
    pub fn get_system<T: System + 'static>(&self) -> Option<&T> {
        self.systems
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<T>())
    }

    /// Access a system mutably by downcasting to a concrete type.
    pub fn get_system_mut<T: System + 'static>(&mut self) -> Option<&mut T> {
        self.systems
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<T>())
    }

    /// Toggle a wearer's ring in response to an activate input.
    ///
    /// The adapter for the host's input hook: at most one flip per call,
    /// recorded in the event log. Returns the input's success/failure
    /// signal — `false` when no ring exists at `index`.
    pub fn toggle_ring(&mut self, wearer: WearerId, index: usize) -> SimResult<bool> {
        let w = self
            .roster
            .get_mut(wearer)
            .ok_or(SimError::WearerNotFound(wearer))?;
        if !w.toggle_ring(index) {
            return Ok(false);
        }

        let name = w.name.clone();
        let enabled = w.rings[index].enabled;
        let state = if enabled { "on" } else { "off" };
        self.events.push(SimEvent::new(
            self.clock.tick(),
            SimEventKind::RingToggled { wearer, enabled },
            format!("{name} turned a ring {state}"),
        ));
        Ok(true)
    }

    /// Extract the roster, consuming the simulation.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// The current tick number.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }
}

/// Placeholder system used during the swap-and-tick pattern.
#[derive(Debug)]
struct NoopSystem;

impl System for NoopSystem {
    fn name(&self) -> &str {
        "noop"
    }
    fn tick(&mut self, _ctx: &mut SimContext<'_>) -> SimResult<()> {
        Ok(())
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
