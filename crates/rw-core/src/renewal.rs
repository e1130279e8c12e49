//! The effect-renewal policy.
//!
//! Once per tick, per worn ring, the caller reads the wearer's remaining
//! duration for the ring's effect and asks [`evaluate`] what to do. The
//! policy itself has one side effect only: paying upkeep through the
//! ledger. Applying the renewed effect is the caller's job.

use crate::effect::EffectId;
use crate::ledger::ResourceLedger;
use crate::ring::RingConfig;

/// The outcome of one renewal-policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The effect still has enough time left. Nothing happens.
    NoAction,
    /// Payment failed; the effect keeps expiring naturally.
    ///
    /// A recurring steady-state outcome for under-resourced wearers,
    /// not an error.
    Denied,
    /// Payment succeeded. The caller applies a fresh effect instance,
    /// replacing any existing instance of the same effect id.
    Renewed {
        /// The effect to apply.
        effect: EffectId,
        /// Potency level of the fresh instance.
        amplifier: u32,
        /// Full duration of the fresh instance, in seconds.
        duration_secs: u32,
    },
}

/// Decide whether to renew a ring's effect, paying upkeep if needed.
///
/// `remaining_secs` is the wearer's current remaining duration for
/// `config.effect` (0 when absent). Renewal triggers at or below the
/// configured threshold — the boundary is inclusive, so effects never
/// visibly lapse at normal tick cadence.
///
/// Payment rules: a non-positive cost is free (this covers both true
/// zero-cost rings and the creative sentinel). A positive cost requires
/// the wearer's ledger; wearers without one are resource-exempt and pay
/// nothing. Callers only invoke this for enabled rings.
pub fn evaluate(
    config: &RingConfig,
    remaining_secs: f64,
    ledger: Option<&mut dyn ResourceLedger>,
) -> TickOutcome {
    if remaining_secs > f64::from(config.renew_threshold_secs) {
        return TickOutcome::NoAction;
    }

    if config.cost > 0
        && let Some(ledger) = ledger
        && !ledger.try_deduct(config.cost)
    {
        return TickOutcome::Denied;
    }

    TickOutcome::Renewed {
        effect: config.effect.clone(),
        amplifier: config.amplifier,
        duration_secs: config.duration_secs,
    }
}
