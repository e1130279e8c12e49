//! Tick-based ring upkeep simulation for Ringwerk.
//!
//! Provides a system-based simulation harness operating on a
//! [`rw_core::Roster`]. The harness plays the host's role from the ring's
//! point of view: it decays timed effects, gates on the enabled flag, asks
//! the renewal policy what to do each tick, and applies the outcomes.

/// Simulation clock for tracking ticks and elapsed in-world seconds.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to systems each tick.
pub mod context;
/// Effect-decay system: ages active effects and expires them.
pub mod effects;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Top-level simulation orchestrator.
pub mod simulation;
/// The trait that all simulation systems implement.
pub mod system;
/// Ring upkeep system: drives the renewal policy for every worn ring.
pub mod upkeep;

/// Re-export of [`clock::SimClock`].
pub use clock::SimClock;
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-export of [`effects::EffectsSystem`].
pub use effects::EffectsSystem;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-export of [`system::System`].
pub use system::System;
/// Re-export of [`upkeep::UpkeepSystem`].
pub use upkeep::UpkeepSystem;
