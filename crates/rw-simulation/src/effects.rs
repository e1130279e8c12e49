use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::SimEventKind;
use crate::system::System;

/// Ages every wearer's active effects by the tick's in-world seconds and
/// emits [`SimEventKind::EffectExpired`] for effects that run out.
///
/// Register this before [`crate::UpkeepSystem`] so renewal sees the
/// post-decay remaining duration and can act within the same tick.
#[derive(Debug, Default)]
pub struct EffectsSystem;

impl EffectsSystem {
    /// Create the effect-decay system.
    pub fn new() -> Self {
        Self
    }
}

impl System for EffectsSystem {
    fn name(&self) -> &str {
        "effects"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let seconds = ctx.seconds_per_tick();

        for id in ctx.roster.ids() {
            let Some(wearer) = ctx.roster.get_mut(id) else {
                continue;
            };
            let name = wearer.name.clone();
            let expired = wearer.effects.decay(seconds);

            for effect in expired {
                ctx.emit(
                    SimEventKind::EffectExpired {
                        wearer: id,
                        effect: effect.clone(),
                    },
                    format!("{name}'s {effect} wore off"),
                );
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
