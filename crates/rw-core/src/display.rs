//! Tooltip derivation from persisted tag data.
//!
//! Tooltip lines are a pure function of the tag map plus the
//! registry-resolved effect name. A malformed tag map never propagates an
//! error: it degrades to sentinel warning lines so a broken item can be
//! identified and discarded without taking the rest of the simulation down.

use crate::effect::EffectRegistry;
use crate::error::{CoreError, CoreResult};
use crate::tags::{TagMap, from_tags};

/// Render the tooltip lines for a ring's tag map.
///
/// On any decode failure the result is the degraded two-line warning
/// rather than an error.
pub fn tooltip_lines(tags: &TagMap, registry: &EffectRegistry) -> Vec<String> {
    match try_tooltip_lines(tags, registry) {
        Ok(lines) => lines,
        Err(_) => vec![
            "An error occurred while reading this ring's data.".to_string(),
            "Discard this item as soon as possible.".to_string(),
        ],
    }
}

fn try_tooltip_lines(tags: &TagMap, registry: &EffectRegistry) -> CoreResult<Vec<String>> {
    let config = from_tags(tags)?;
    let def = registry
        .get(&config.effect)
        .ok_or_else(|| CoreError::UnknownEffect(config.effect.clone()))?;

    let potency = potency_numeral(config.amplifier);
    let effect_line = if potency.is_empty() {
        format!("Effect: {}", def.name)
    } else {
        format!("Effect: {} {potency}", def.name)
    };

    let cost_line = if config.cost > 0 {
        format!("Upkeep: {} XP per renewal", config.cost)
    } else {
        "No upkeep required".to_string()
    };

    Ok(vec![
        effect_line,
        cost_line,
        format!("Duration: {}s", config.duration_secs),
        if config.enabled {
            "Active".to_string()
        } else {
            "Inactive".to_string()
        },
    ])
}

/// Roman-numeral potency suffix for an amplifier level.
///
/// Level one (amplifier 0) renders with no suffix, matching the usual
/// potion display convention; very high levels fall back to arabic.
pub fn potency_numeral(amplifier: u32) -> String {
    const NUMERALS: [&str; 9] = ["II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
    match amplifier {
        0 => String::new(),
        1..=9 => NUMERALS[amplifier as usize - 1].to_string(),
        _ => format!("{}", amplifier + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{EffectDef, EffectId};
    use crate::ring::{CREATIVE_COST, RingConfig};
    use crate::tags::{TAG_LENGTH, TagValue, to_tags};

    fn registry() -> EffectRegistry {
        EffectRegistry::from_defs([EffectDef {
            id: EffectId::new("haste"),
            name: "Haste".into(),
            instant: false,
        }])
    }

    #[test]
    fn metered_ring_tooltip() {
        let ring = RingConfig::new(EffectId::new("haste"), 1, 10, 60, 20)
            .unwrap()
            .with_enabled(true);
        let lines = tooltip_lines(&to_tags(&ring), &registry());
        assert_eq!(
            lines,
            vec![
                "Effect: Haste II",
                "Upkeep: 10 XP per renewal",
                "Duration: 60s",
                "Active",
            ]
        );
    }

    #[test]
    fn creative_ring_tooltip() {
        let ring = RingConfig::new(EffectId::new("haste"), 0, CREATIVE_COST, 60, 20).unwrap();
        let lines = tooltip_lines(&to_tags(&ring), &registry());
        assert_eq!(
            lines,
            vec![
                "Effect: Haste",
                "No upkeep required",
                "Duration: 60s",
                "Inactive",
            ]
        );
    }

    #[test]
    fn malformed_tags_degrade_to_the_warning_lines() {
        let ring = RingConfig::new(EffectId::new("haste"), 0, 10, 60, 20).unwrap();
        let mut tags = to_tags(&ring);
        tags.insert(TAG_LENGTH.into(), TagValue::String("sixty".into()));
        let lines = tooltip_lines(&tags, &registry());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("error"));
        assert!(lines[1].contains("Discard"));
    }

    #[test]
    fn unknown_effect_degrades_too() {
        let ring = RingConfig::new(EffectId::new("unregistered"), 0, 10, 60, 20).unwrap();
        let lines = tooltip_lines(&to_tags(&ring), &registry());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn potency_numerals() {
        assert_eq!(potency_numeral(0), "");
        assert_eq!(potency_numeral(1), "II");
        assert_eq!(potency_numeral(4), "V");
        assert_eq!(potency_numeral(9), "X");
        assert_eq!(potency_numeral(19), "20");
    }
}
