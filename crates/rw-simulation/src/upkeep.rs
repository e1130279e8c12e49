use rw_core::effect::EffectInstance;
use rw_core::ledger::ResourceLedger;
use rw_core::renewal::{TickOutcome, evaluate};

use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::SimEventKind;
use crate::system::System;

/// Drives the renewal policy for every worn ring, once per wearer per tick.
///
/// Disabled rings are skipped here, before the policy ever runs. For each
/// enabled ring the system reads the wearer's remaining duration, asks
/// [`evaluate`] what to do, applies `Renewed` outcomes as fresh effect
/// instances, and records renewals and denials in the event log.
#[derive(Debug, Default)]
pub struct UpkeepSystem;

impl UpkeepSystem {
    /// Create the ring upkeep system.
    pub fn new() -> Self {
        Self
    }
}

impl System for UpkeepSystem {
    fn name(&self) -> &str {
        "upkeep"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        for id in ctx.roster.ids() {
            let Some(wearer) = ctx.roster.get_mut(id) else {
                continue;
            };
            let name = wearer.name.clone();
            let mut outcomes = Vec::new();

            for ring in &wearer.rings {
                if !ring.enabled {
                    continue;
                }
                let remaining = wearer.effects.remaining(&ring.effect);
                let ledger = wearer
                    .ledger
                    .as_mut()
                    .map(|pool| pool as &mut dyn ResourceLedger);

                match evaluate(ring, remaining, ledger) {
                    TickOutcome::NoAction => {}
                    TickOutcome::Denied => {
                        outcomes.push((ring.effect.clone(), ring.cost, None));
                    }
                    TickOutcome::Renewed {
                        effect,
                        amplifier,
                        duration_secs,
                    } => {
                        wearer
                            .effects
                            .apply(EffectInstance::new(effect, amplifier, duration_secs));
                        outcomes.push((ring.effect.clone(), ring.cost, Some(ring.cost.max(0))));
                    }
                }
            }

            for (effect, cost, result) in outcomes {
                match result {
                    Some(cost_paid) => ctx.emit(
                        SimEventKind::EffectRenewed {
                            wearer: id,
                            effect: effect.clone(),
                            cost_paid,
                        },
                        format!("{name}'s ring renewed {effect}"),
                    ),
                    None => ctx.emit(
                        SimEventKind::RenewalDenied {
                            wearer: id,
                            effect: effect.clone(),
                            cost,
                        },
                        format!("{name} cannot pay {cost} XP to renew {effect}"),
                    ),
                }
            }
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
