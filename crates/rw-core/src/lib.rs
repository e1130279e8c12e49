//! Core types for Ringwerk: effects, rings, ledgers, and the wearer roster.
//!
//! This crate defines the data model and the pure decision logic. It is
//! independent of any driver — you can evaluate the renewal policy against
//! hand-built state, or let `rw-simulation` tick a whole [`Roster`].

/// Ring-variant enumeration from a content pack.
pub mod catalog;
/// Tooltip derivation from persisted tag data.
pub mod display;
/// Effect identifiers, the effect registry, and per-wearer effect state.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Resource ledgers that pay renewal upkeep.
pub mod ledger;
/// The effect-renewal policy.
pub mod renewal;
/// Ring configuration attached to a single ring item.
pub mod ring;
/// The persisted key-value tag boundary.
pub mod tags;
/// Wearer entities and the roster that owns them.
pub mod wearer;

/// Re-export catalog types.
pub use catalog::{CatalogConfig, ContentPack, EffectSpec, PotionVariant, enumerate};
/// Re-export effect types.
pub use effect::{ActiveEffects, EffectDef, EffectId, EffectInstance, EffectRegistry};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export ledger types.
pub use ledger::{ResourceLedger, XpPool};
/// Re-export the renewal policy.
pub use renewal::{TickOutcome, evaluate};
/// Re-export ring configuration types.
pub use ring::{CREATIVE_COST, RingConfig};
/// Re-export tag boundary types.
pub use tags::{TagMap, TagValue};
/// Re-export wearer and roster types.
pub use wearer::{Roster, RosterMeta, Wearer, WearerId};
