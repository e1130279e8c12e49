//! Ring-variant enumeration from a content pack.
//!
//! A content pack declares the effect registry and the available potion
//! variants. Enumeration produces one seed [`RingConfig`] per eligible
//! variant: single-effect, non-instantaneous, first-seen-wins per
//! `(amplifier, effect)` key. The dedup is an explicit pure function over
//! the full candidate list — no hidden mutable capture — and preserves
//! declaration order, so "long" variants that share potency with a base
//! variant are dropped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::effect::{EffectDef, EffectId, EffectRegistry};
use crate::error::CoreResult;
use crate::ring::{CREATIVE_COST, RingConfig};

/// One effect carried by a potion variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    /// The effect type.
    pub effect: EffectId,
    /// Non-negative potency level.
    #[serde(default)]
    pub amplifier: u32,
}

/// A brewable potion variant as the content pack declares it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotionVariant {
    /// The variant's identifier, e.g. `haste` or `long_haste`.
    pub id: String,
    /// The effects this variant applies. Only single-effect variants are
    /// eligible for rings.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

/// A content pack: effect definitions plus potion variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPack {
    /// The effect registry entries.
    #[serde(default)]
    pub effects: Vec<EffectDef>,
    /// The potion variants.
    #[serde(default)]
    pub potions: Vec<PotionVariant>,
}

impl ContentPack {
    /// Build the effect registry declared by this pack.
    pub fn registry(&self) -> EffectRegistry {
        EffectRegistry::from_defs(self.effects.iter().cloned())
    }
}

/// Settings for ring enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Master switch; when false no rings are produced at all.
    pub enabled: bool,
    /// Seed cost for every enumerated ring.
    pub default_cost: i32,
    /// Seed duration, in seconds.
    pub default_length_secs: u32,
    /// Seed renewal threshold, in seconds.
    pub default_renew_secs: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_cost: CREATIVE_COST,
            default_length_secs: 60,
            default_renew_secs: 20,
        }
    }
}

/// Enumerate the seed ring configurations for a set of potion variants.
///
/// Eligibility: exactly one effect, known to the registry, not
/// instantaneous. Variants whose `(amplifier, effect)` key was already
/// seen are skipped. Seeds come out disabled, in declaration order.
pub fn enumerate(
    registry: &EffectRegistry,
    potions: &[PotionVariant],
    config: &CatalogConfig,
) -> CoreResult<Vec<RingConfig>> {
    if !config.enabled {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<(u32, EffectId)> = HashSet::new();
    let mut seeds = Vec::new();

    for variant in potions {
        let [spec] = variant.effects.as_slice() else {
            continue;
        };
        if registry.is_instant(&spec.effect) != Some(false) {
            continue;
        }
        if !seen.insert((spec.amplifier, spec.effect.clone())) {
            continue;
        }
        seeds.push(RingConfig::new(
            spec.effect.clone(),
            spec.amplifier,
            config.default_cost,
            config.default_length_secs,
            config.default_renew_secs,
        )?);
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, name: &str, instant: bool) -> EffectDef {
        EffectDef {
            id: EffectId::new(id),
            name: name.into(),
            instant,
        }
    }

    fn variant(id: &str, effects: &[(&str, u32)]) -> PotionVariant {
        PotionVariant {
            id: id.into(),
            effects: effects
                .iter()
                .map(|(effect, amplifier)| EffectSpec {
                    effect: EffectId::new(*effect),
                    amplifier: *amplifier,
                })
                .collect(),
        }
    }

    fn pack() -> ContentPack {
        ContentPack {
            effects: vec![
                def("haste", "Haste", false),
                def("strength", "Strength", false),
                def("instant_health", "Instant Health", true),
            ],
            potions: vec![
                variant("haste", &[("haste", 0)]),
                variant("long_haste", &[("haste", 0)]),
                variant("strong_haste", &[("haste", 1)]),
                variant("healing", &[("instant_health", 0)]),
                variant("turtle_master", &[("strength", 0), ("haste", 0)]),
                variant("strength", &[("strength", 0)]),
            ],
        }
    }

    #[test]
    fn enumerates_one_seed_per_potency() {
        let pack = pack();
        let seeds = enumerate(&pack.registry(), &pack.potions, &CatalogConfig::default()).unwrap();

        // long_haste shares (0, haste) with haste and is dropped; the
        // multi-effect and instantaneous variants are ineligible.
        let keys: Vec<_> = seeds
            .iter()
            .map(|s| (s.effect.as_str().to_string(), s.amplifier))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("haste".to_string(), 0),
                ("haste".to_string(), 1),
                ("strength".to_string(), 0),
            ]
        );
    }

    #[test]
    fn seeds_carry_the_configured_defaults() {
        let pack = pack();
        let seeds = enumerate(&pack.registry(), &pack.potions, &CatalogConfig::default()).unwrap();
        let seed = &seeds[0];
        assert_eq!(seed.cost, CREATIVE_COST);
        assert_eq!(seed.duration_secs, 60);
        assert_eq!(seed.renew_threshold_secs, 20);
        assert!(!seed.enabled);
    }

    #[test]
    fn disabled_catalog_produces_nothing() {
        let pack = pack();
        let config = CatalogConfig {
            enabled: false,
            ..CatalogConfig::default()
        };
        let seeds = enumerate(&pack.registry(), &pack.potions, &config).unwrap();
        assert!(seeds.is_empty());
    }

    #[test]
    fn unknown_effects_are_skipped() {
        let pack = ContentPack {
            effects: vec![def("haste", "Haste", false)],
            potions: vec![
                variant("haste", &[("haste", 0)]),
                variant("mystery", &[("unregistered", 0)]),
            ],
        };
        let seeds = enumerate(&pack.registry(), &pack.potions, &CatalogConfig::default()).unwrap();
        assert_eq!(seeds.len(), 1);
    }

    #[test]
    fn zero_default_length_is_rejected() {
        let pack = pack();
        let config = CatalogConfig {
            default_length_secs: 0,
            ..CatalogConfig::default()
        };
        assert!(enumerate(&pack.registry(), &pack.potions, &config).is_err());
    }
}
