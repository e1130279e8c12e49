use rw_core::effect::EffectId;
use rw_core::wearer::WearerId;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    /// A ring renewed its effect on a wearer.
    EffectRenewed {
        /// The wearer whose effect was renewed.
        wearer: WearerId,
        /// The renewed effect.
        effect: EffectId,
        /// The resource amount actually deducted (0 for free or exempt renewals).
        cost_paid: i32,
    },
    /// A ring wanted to renew but the wearer could not pay the upkeep.
    RenewalDenied {
        /// The wearer who could not pay.
        wearer: WearerId,
        /// The effect that was not renewed.
        effect: EffectId,
        /// The upkeep cost that could not be met.
        cost: i32,
    },
    /// A timed effect ran out on a wearer.
    EffectExpired {
        /// The wearer the effect wore off of.
        wearer: WearerId,
        /// The effect that wore off.
        effect: EffectId,
    },
    /// A wearer toggled one of their rings.
    RingToggled {
        /// The wearer who toggled the ring.
        wearer: WearerId,
        /// The ring's state after the toggle.
        enabled: bool,
    },
    /// A user-defined event.
    Custom {
        /// A label identifying the custom event type.
        label: String,
        /// The wearers involved in this custom event.
        wearers: Vec<WearerId>,
    },
}

impl SimEventKind {
    /// Check whether a given wearer is involved in this event.
    pub fn involves(&self, id: WearerId) -> bool {
        match self {
            Self::EffectRenewed { wearer, .. }
            | Self::RenewalDenied { wearer, .. }
            | Self::EffectExpired { wearer, .. }
            | Self::RingToggled { wearer, .. } => *wearer == id,
            Self::Custom { wearers, .. } => wearers.contains(&id),
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return all events involving the given wearer.
    pub fn events_for_wearer(&self, id: WearerId) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
