use serde::{Deserialize, Serialize};

use crate::effect::EffectId;
use crate::error::{CoreError, CoreResult};

/// Cost sentinel for creative-only rings. Treated by the renewal policy
/// like any other non-positive cost; only the display layer distinguishes it.
pub const CREATIVE_COST: i32 = -1;

/// Configuration carried by a single ring item.
///
/// Created once when the ring is produced and mutated only via
/// [`RingConfig::toggle`] for the lifetime of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingConfig {
    /// The one effect this ring sustains.
    pub effect: EffectId,
    /// Non-negative potency level of that effect.
    pub amplifier: u32,
    /// Resource cost per renewal. Non-positive means free/unmetered.
    pub cost: i32,
    /// Full duration, in seconds, applied on each renewal.
    pub duration_secs: u32,
    /// Remaining-duration threshold at or below which renewal triggers.
    pub renew_threshold_secs: u32,
    /// Whether the ring acts at all. User-toggleable.
    pub enabled: bool,
}

impl RingConfig {
    /// Create a disabled ring configuration, validating invariants.
    pub fn new(
        effect: EffectId,
        amplifier: u32,
        cost: i32,
        duration_secs: u32,
        renew_threshold_secs: u32,
    ) -> CoreResult<Self> {
        if duration_secs == 0 {
            return Err(CoreError::InvalidConfig(
                "duration must be at least one second".into(),
            ));
        }
        Ok(Self {
            effect,
            amplifier,
            cost,
            duration_secs,
            renew_threshold_secs,
            enabled: false,
        })
    }

    /// Set the enabled flag, consuming and returning the config.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Flip the enabled flag. Toggling twice restores the prior state.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Whether renewals draw from a resource ledger.
    pub fn is_metered(&self) -> bool {
        self.cost > 0
    }

    /// Active rings carry a glint marker in item displays.
    pub fn shows_glint(&self) -> bool {
        self.enabled
    }
}
