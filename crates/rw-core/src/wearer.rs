use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::effect::ActiveEffects;
use crate::error::{CoreError, CoreResult};
use crate::ledger::XpPool;
use crate::ring::RingConfig;

/// Unique identifier for every wearer in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WearerId(pub Uuid);

impl WearerId {
    /// Generate a new random wearer ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WearerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WearerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An entity that can wear rings: a name, its timed effects, an optional
/// resource ledger, and the rings it has on.
///
/// Wearers without a ledger are resource-exempt — metered rings renew on
/// them without payment.
#[derive(Debug, Clone)]
pub struct Wearer {
    /// Unique identifier.
    pub id: WearerId,
    /// Display name, unique per roster (case-insensitive).
    pub name: String,
    /// The timed effects currently on this wearer.
    pub effects: ActiveEffects,
    /// The consumable resource balance, if this wearer carries one.
    pub ledger: Option<XpPool>,
    /// The rings this wearer has on.
    pub rings: Vec<RingConfig>,
}

impl Wearer {
    /// Create a wearer with no ledger and no rings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WearerId::new(),
            name: name.into(),
            effects: ActiveEffects::new(),
            ledger: None,
            rings: Vec::new(),
        }
    }

    /// Attach an experience-point ledger, consuming and returning the wearer.
    pub fn with_xp(mut self, points: i32) -> Self {
        self.ledger = Some(XpPool::new(points));
        self
    }

    /// Put a ring on.
    pub fn wear(&mut self, ring: RingConfig) {
        self.rings.push(ring);
    }

    /// Toggle the ring at `index` in response to an activate input.
    ///
    /// Returns `true` if a ring existed at that index — the success/failure
    /// signal handed back to whatever dispatched the input.
    pub fn toggle_ring(&mut self, index: usize) -> bool {
        match self.rings.get_mut(index) {
            Some(ring) => {
                ring.toggle();
                true
            }
            None => false,
        }
    }
}

/// Metadata about the roster itself.
#[derive(Debug, Clone)]
pub struct RosterMeta {
    /// Display name of the roster.
    pub name: String,
    /// Timestamp when the roster was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the roster was last modified.
    pub updated_at: DateTime<Utc>,
}

impl RosterMeta {
    /// Create metadata stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Owns all wearers. Iteration order is insertion order, which keeps
/// simulation runs deterministic for a given setup.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Metadata about this roster.
    pub meta: RosterMeta,
    wearers: HashMap<WearerId, Wearer>,
    by_name_lower: HashMap<String, WearerId>,
    order: Vec<WearerId>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new(meta: RosterMeta) -> Self {
        Self {
            meta,
            wearers: HashMap::new(),
            by_name_lower: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add a wearer. Returns the wearer's ID.
    pub fn add_wearer(&mut self, wearer: Wearer) -> CoreResult<WearerId> {
        let name_lower = wearer.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName(wearer.name.clone()));
        }

        let id = wearer.id;
        self.by_name_lower.insert(name_lower, id);
        self.order.push(id);
        self.wearers.insert(id, wearer);
        self.meta.updated_at = Utc::now();
        Ok(id)
    }

    /// Get a reference to a wearer by ID.
    pub fn get(&self, id: WearerId) -> Option<&Wearer> {
        self.wearers.get(&id)
    }

    /// Get a mutable reference to a wearer by ID.
    pub fn get_mut(&mut self, id: WearerId) -> Option<&mut Wearer> {
        self.wearers.get_mut(&id)
    }

    /// Find a wearer by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Wearer> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.wearers.get(id))
    }

    /// The display name of a wearer, or a short id form if unknown.
    pub fn wearer_name(&self, id: WearerId) -> String {
        self.wearers
            .get(&id)
            .map_or_else(|| id.to_string(), |w| w.name.clone())
    }

    /// All wearer IDs, in insertion order.
    pub fn ids(&self) -> Vec<WearerId> {
        self.order.clone()
    }

    /// Iterate over wearers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Wearer> {
        self.order.iter().filter_map(|id| self.wearers.get(id))
    }

    /// Number of wearers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the roster has no wearers.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectId;

    #[test]
    fn wearer_id_display_shows_short_form() {
        let id = WearerId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn new_wearer_is_ledgerless() {
        let wearer = Wearer::new("Mirelle");
        assert!(wearer.ledger.is_none());
        assert!(wearer.rings.is_empty());
    }

    #[test]
    fn with_xp_attaches_a_ledger() {
        let wearer = Wearer::new("Mirelle").with_xp(30);
        assert_eq!(wearer.ledger.unwrap().points(), 30);
    }

    #[test]
    fn toggle_ring_reports_success() {
        let mut wearer = Wearer::new("Mirelle");
        let ring = RingConfig::new(EffectId::new("haste"), 0, 10, 60, 20).unwrap();
        wearer.wear(ring);

        assert!(wearer.toggle_ring(0));
        assert!(wearer.rings[0].enabled);
        assert!(!wearer.toggle_ring(1));
    }

    #[test]
    fn roster_rejects_duplicate_names() {
        let mut roster = Roster::new(RosterMeta::new("Test"));
        roster.add_wearer(Wearer::new("Mirelle")).unwrap();
        let err = roster.add_wearer(Wearer::new("mirelle")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName(_)));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn roster_lookup_by_name_is_case_insensitive() {
        let mut roster = Roster::new(RosterMeta::new("Test"));
        let id = roster.add_wearer(Wearer::new("Mirelle")).unwrap();
        assert_eq!(roster.find_by_name("MIRELLE").unwrap().id, id);
        assert_eq!(roster.wearer_name(id), "Mirelle");
    }

    #[test]
    fn roster_iterates_in_insertion_order() {
        let mut roster = Roster::new(RosterMeta::new("Test"));
        roster.add_wearer(Wearer::new("Zed")).unwrap();
        roster.add_wearer(Wearer::new("Ana")).unwrap();
        let names: Vec<_> = roster.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Ana"]);
    }

    #[test]
    fn unknown_wearer_name_falls_back_to_short_id() {
        let roster = Roster::new(RosterMeta::new("Test"));
        let id = WearerId::new();
        assert_eq!(roster.wearer_name(id), id.to_string());
    }
}
