use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a status effect type, e.g. `haste` or `night_vision`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(pub String);

impl EffectId {
    /// Create an effect id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EffectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Definition of an effect type as the content pack declares it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectDef {
    /// The effect's identifier.
    pub id: EffectId,
    /// Human-readable display name, e.g. "Haste".
    pub name: String,
    /// Instantaneous effects have no duration and can never be sustained.
    #[serde(default)]
    pub instant: bool,
}

/// Lookup table of effect definitions, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct EffectRegistry {
    by_id: HashMap<EffectId, EffectDef>,
}

impl EffectRegistry {
    /// Build a registry from a list of definitions. Later duplicates win.
    pub fn from_defs(defs: impl IntoIterator<Item = EffectDef>) -> Self {
        let by_id = defs.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self { by_id }
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &EffectId) -> Option<&EffectDef> {
        self.by_id.get(id)
    }

    /// Whether the registry knows this effect id.
    pub fn contains(&self, id: &EffectId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Whether the effect is instantaneous. Unknown effects read as `None`.
    pub fn is_instant(&self, id: &EffectId) -> Option<bool> {
        self.by_id.get(id).map(|d| d.instant)
    }

    /// Number of registered effect definitions.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if no effects are registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// One applied effect on a wearer: type, potency, and time left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectInstance {
    /// The effect type this instance applies.
    pub effect: EffectId,
    /// Non-negative potency level (0 is the base level).
    pub amplifier: u32,
    /// Seconds until the instance wears off.
    pub remaining_secs: f64,
}

impl EffectInstance {
    /// Create a fresh instance with its full duration remaining.
    pub fn new(effect: EffectId, amplifier: u32, duration_secs: u32) -> Self {
        Self {
            effect,
            amplifier,
            remaining_secs: f64::from(duration_secs),
        }
    }
}

/// The set of timed effects currently on a wearer.
///
/// Applying an instance replaces any existing instance of the same effect
/// id outright. Durations are never added together, so frequent renewal
/// cannot stack time beyond the configured full duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: BTreeMap<EffectId, EffectInstance>,
}

impl ActiveEffects {
    /// Create an empty effect set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an instance, replacing any existing instance of the same effect.
    pub fn apply(&mut self, instance: EffectInstance) {
        self.effects.insert(instance.effect.clone(), instance);
    }

    /// Remaining seconds for an effect. Absent effects read as `0.0`.
    pub fn remaining(&self, effect: &EffectId) -> f64 {
        self.effects.get(effect).map_or(0.0, |e| e.remaining_secs)
    }

    /// Get the active instance of an effect, if present.
    pub fn get(&self, effect: &EffectId) -> Option<&EffectInstance> {
        self.effects.get(effect)
    }

    /// Whether the effect is currently present.
    pub fn has(&self, effect: &EffectId) -> bool {
        self.effects.contains_key(effect)
    }

    /// Remove an effect outright, returning it if it was present.
    pub fn remove(&mut self, effect: &EffectId) -> Option<EffectInstance> {
        self.effects.remove(effect)
    }

    /// Advance time by `seconds`, dropping effects that run out.
    ///
    /// Returns the ids of effects that expired this step, in id order.
    pub fn decay(&mut self, seconds: f64) -> Vec<EffectId> {
        let mut expired = Vec::new();
        self.effects.retain(|id, instance| {
            instance.remaining_secs -= seconds;
            let keep = instance.remaining_secs > 0.0;
            if !keep {
                expired.push(id.clone());
            }
            keep
        });
        expired
    }

    /// Iterate over active instances in effect-id order.
    pub fn iter(&self) -> impl Iterator<Item = &EffectInstance> {
        self.effects.values()
    }

    /// Number of active effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns `true` if no effects are active.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Remove all active effects.
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haste(amplifier: u32, duration_secs: u32) -> EffectInstance {
        EffectInstance::new(EffectId::new("haste"), amplifier, duration_secs)
    }

    #[test]
    fn absent_effect_reads_as_zero_remaining() {
        let effects = ActiveEffects::new();
        assert_eq!(effects.remaining(&EffectId::new("haste")), 0.0);
        assert!(!effects.has(&EffectId::new("haste")));
    }

    #[test]
    fn apply_replaces_never_extends() {
        let mut effects = ActiveEffects::new();
        effects.apply(haste(0, 60));
        effects.decay(10.0);
        assert_eq!(effects.remaining(&EffectId::new("haste")), 50.0);

        // Re-applying resets to the full duration, it does not add 60s on top.
        effects.apply(haste(0, 60));
        assert_eq!(effects.remaining(&EffectId::new("haste")), 60.0);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn apply_replaces_amplifier_too() {
        let mut effects = ActiveEffects::new();
        effects.apply(haste(0, 60));
        effects.apply(haste(2, 30));
        let instance = effects.get(&EffectId::new("haste")).unwrap();
        assert_eq!(instance.amplifier, 2);
        assert_eq!(instance.remaining_secs, 30.0);
    }

    #[test]
    fn decay_reports_expired_effects() {
        let mut effects = ActiveEffects::new();
        effects.apply(haste(0, 5));
        effects.apply(EffectInstance::new(EffectId::new("strength"), 1, 20));

        let expired = effects.decay(5.0);
        assert_eq!(expired, vec![EffectId::new("haste")]);
        assert!(!effects.has(&EffectId::new("haste")));
        assert_eq!(effects.remaining(&EffectId::new("strength")), 15.0);
    }

    #[test]
    fn decay_expired_order_is_deterministic() {
        let mut effects = ActiveEffects::new();
        effects.apply(EffectInstance::new(EffectId::new("speed"), 0, 3));
        effects.apply(EffectInstance::new(EffectId::new("glowing"), 0, 3));
        let expired = effects.decay(3.0);
        assert_eq!(
            expired,
            vec![EffectId::new("glowing"), EffectId::new("speed")]
        );
    }

    #[test]
    fn registry_lookup() {
        let registry = EffectRegistry::from_defs([
            EffectDef {
                id: EffectId::new("haste"),
                name: "Haste".into(),
                instant: false,
            },
            EffectDef {
                id: EffectId::new("instant_health"),
                name: "Instant Health".into(),
                instant: true,
            },
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.is_instant(&EffectId::new("haste")), Some(false));
        assert_eq!(
            registry.is_instant(&EffectId::new("instant_health")),
            Some(true)
        );
        assert_eq!(registry.is_instant(&EffectId::new("missing")), None);
        assert!(!registry.contains(&EffectId::new("missing")));
    }
}
