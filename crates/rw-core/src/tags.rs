//! The persisted key-value tag boundary.
//!
//! A ring's entire serialized footprint is a small stringly-keyed tag map.
//! The `cost`, `length`, `renew`, and `disabled` keys keep the names and
//! shapes of the original save format; `effect` and `amplifier` carry the
//! effect identity so the map is self-contained.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::effect::EffectId;
use crate::error::{CoreError, CoreResult};
use crate::ring::RingConfig;

/// Tag key for the per-renewal resource cost.
pub const TAG_COST: &str = "cost";
/// Tag key for the full effect duration, in seconds.
pub const TAG_LENGTH: &str = "length";
/// Tag key for the renewal threshold, in seconds.
pub const TAG_RENEW: &str = "renew";
/// Tag key for the disabled flag.
pub const TAG_DISABLED: &str = "disabled";
/// Tag key for the effect id.
pub const TAG_EFFECT: &str = "effect";
/// Tag key for the effect potency level.
pub const TAG_AMPLIFIER: &str = "amplifier";

/// A single persisted tag value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// A boolean value.
    Boolean(bool),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A text value.
    String(String),
}

/// The stringly-keyed tag map attached to a ring item.
pub type TagMap = BTreeMap<String, TagValue>;

/// Serialize a ring configuration into its persisted tag map.
pub fn to_tags(config: &RingConfig) -> TagMap {
    let mut tags = TagMap::new();
    tags.insert(
        TAG_EFFECT.into(),
        TagValue::String(config.effect.as_str().into()),
    );
    tags.insert(
        TAG_AMPLIFIER.into(),
        TagValue::Integer(i64::from(config.amplifier)),
    );
    tags.insert(TAG_COST.into(), TagValue::Integer(i64::from(config.cost)));
    tags.insert(
        TAG_LENGTH.into(),
        TagValue::Integer(i64::from(config.duration_secs)),
    );
    tags.insert(
        TAG_RENEW.into(),
        TagValue::Integer(i64::from(config.renew_threshold_secs)),
    );
    tags.insert(TAG_DISABLED.into(), TagValue::Boolean(!config.enabled));
    tags
}

/// Decode a ring configuration from a persisted tag map.
///
/// Fails with a typed error naming the offending key when a field is
/// absent or of the wrong shape.
pub fn from_tags(tags: &TagMap) -> CoreResult<RingConfig> {
    let effect = EffectId::new(str_field(tags, TAG_EFFECT)?);
    let amplifier = u32_field(tags, TAG_AMPLIFIER)?;
    let cost = i32_field(tags, TAG_COST)?;
    let duration_secs = u32_field(tags, TAG_LENGTH)?;
    let renew_threshold_secs = u32_field(tags, TAG_RENEW)?;
    let disabled = bool_field(tags, TAG_DISABLED)?;

    Ok(
        RingConfig::new(effect, amplifier, cost, duration_secs, renew_threshold_secs)?
            .with_enabled(!disabled),
    )
}

fn field<'a>(tags: &'a TagMap, key: &str) -> CoreResult<&'a TagValue> {
    tags.get(key).ok_or_else(|| CoreError::MissingField {
        key: key.to_string(),
    })
}

fn str_field<'a>(tags: &'a TagMap, key: &str) -> CoreResult<&'a str> {
    match field(tags, key)? {
        TagValue::String(s) => Ok(s),
        _ => Err(CoreError::WrongShape {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

fn bool_field(tags: &TagMap, key: &str) -> CoreResult<bool> {
    match field(tags, key)? {
        TagValue::Boolean(b) => Ok(*b),
        _ => Err(CoreError::WrongShape {
            key: key.to_string(),
            expected: "a boolean",
        }),
    }
}

fn i64_field(tags: &TagMap, key: &str) -> CoreResult<i64> {
    match field(tags, key)? {
        TagValue::Integer(n) => Ok(*n),
        _ => Err(CoreError::WrongShape {
            key: key.to_string(),
            expected: "an integer",
        }),
    }
}

fn i32_field(tags: &TagMap, key: &str) -> CoreResult<i32> {
    i32::try_from(i64_field(tags, key)?).map_err(|_| CoreError::WrongShape {
        key: key.to_string(),
        expected: "a 32-bit integer",
    })
}

fn u32_field(tags: &TagMap, key: &str) -> CoreResult<u32> {
    u32::try_from(i64_field(tags, key)?).map_err(|_| CoreError::WrongShape {
        key: key.to_string(),
        expected: "a non-negative integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::CREATIVE_COST;

    fn sample_ring() -> RingConfig {
        RingConfig::new(EffectId::new("haste"), 1, 10, 60, 20)
            .unwrap()
            .with_enabled(true)
    }

    #[test]
    fn tags_use_the_original_key_names() {
        let tags = to_tags(&sample_ring());
        assert_eq!(tags.get(TAG_COST), Some(&TagValue::Integer(10)));
        assert_eq!(tags.get(TAG_LENGTH), Some(&TagValue::Integer(60)));
        assert_eq!(tags.get(TAG_RENEW), Some(&TagValue::Integer(20)));
        // The persisted flag is "disabled", inverted from the live flag.
        assert_eq!(tags.get(TAG_DISABLED), Some(&TagValue::Boolean(false)));
    }

    #[test]
    fn round_trip_preserves_the_config() {
        let ring = sample_ring();
        let decoded = from_tags(&to_tags(&ring)).unwrap();
        assert_eq!(decoded, ring);
    }

    #[test]
    fn creative_ring_round_trips() {
        let ring = RingConfig::new(EffectId::new("night_vision"), 0, CREATIVE_COST, 60, 20)
            .unwrap();
        let decoded = from_tags(&to_tags(&ring)).unwrap();
        assert_eq!(decoded.cost, CREATIVE_COST);
        assert!(!decoded.enabled);
    }

    #[test]
    fn missing_field_names_the_key() {
        let mut tags = to_tags(&sample_ring());
        tags.remove(TAG_RENEW);
        let err = from_tags(&tags).unwrap_err();
        assert!(matches!(err, CoreError::MissingField { key } if key == TAG_RENEW));
    }

    #[test]
    fn wrong_shape_names_the_key() {
        let mut tags = to_tags(&sample_ring());
        tags.insert(TAG_COST.into(), TagValue::String("ten".into()));
        let err = from_tags(&tags).unwrap_err();
        assert!(matches!(err, CoreError::WrongShape { key, .. } if key == TAG_COST));
    }

    #[test]
    fn negative_length_is_rejected() {
        let mut tags = to_tags(&sample_ring());
        tags.insert(TAG_LENGTH.into(), TagValue::Integer(-3));
        assert!(from_tags(&tags).is_err());
    }

    #[test]
    fn zero_length_fails_config_validation() {
        let mut tags = to_tags(&sample_ring());
        tags.insert(TAG_LENGTH.into(), TagValue::Integer(0));
        let err = from_tags(&tags).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }
}
