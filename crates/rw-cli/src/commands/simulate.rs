use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Deserialize;

use rw_core::effect::EffectId;
use rw_core::ring::RingConfig;
use rw_core::wearer::{Roster, RosterMeta, Wearer};
use rw_simulation::{EffectsSystem, SimConfig, SimEventKind, Simulation, UpkeepSystem};

/// A simulation scenario file.
#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    #[serde(default)]
    wearers: Vec<ScenarioWearer>,
}

#[derive(Debug, Deserialize)]
struct ScenarioWearer {
    name: String,
    /// Experience-point balance. Absent means the wearer is resource-exempt.
    #[serde(default)]
    xp: Option<i32>,
    #[serde(default)]
    rings: Vec<ScenarioRing>,
}

/// A worn ring, using the persisted field names for the scalar fields.
#[derive(Debug, Deserialize)]
struct ScenarioRing {
    effect: String,
    #[serde(default)]
    amplifier: u32,
    cost: i32,
    length: u32,
    renew: u32,
    #[serde(default = "enabled_default")]
    enabled: bool,
}

fn enabled_default() -> bool {
    true
}

pub fn run(file: &Path, ticks: u64, seed: u64, speed: f64, verbose: bool) -> Result<(), String> {
    let scenario: Scenario = super::load_json(file)?;
    let roster = build_roster(&scenario)?;

    if roster.is_empty() {
        println!("  No wearers in scenario. Nothing to simulate.");
        return Ok(());
    }

    let config = SimConfig::default()
        .with_seed(seed)
        .with_seconds_per_tick(speed)
        .with_max_events(500);

    let mut sim = Simulation::new(roster, config);
    sim.add_system(EffectsSystem::new());
    sim.add_system(UpkeepSystem::new());

    sim.init()
        .map_err(|e| format!("simulation init failed: {e}"))?;
    sim.run(ticks)
        .map_err(|e| format!("simulation error: {e}"))?;

    // Header
    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        scenario.name,
        format!("({ticks} ticks, seed={seed}, speed={speed}s/tick)").dimmed()
    );
    println!(
        "  {} wearers simulated, {} events logged",
        sim.roster().len(),
        sim.events().len()
    );
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let tick_label = format!("[tick {:>3}]", event.tick).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {tick_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let denials: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::RenewalDenied { .. }))
            .collect();
        let expiries: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::EffectExpired { .. }))
            .collect();

        if !denials.is_empty() || !expiries.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in &denials {
                println!("  {}  {}", "DENIED".yellow().bold(), event.description);
            }
            for event in &expiries {
                println!("  {} {}", "EXPIRED".red().bold(), event.description);
            }
            println!();
        }
    }

    // Renewal totals
    let renewals = sim
        .events()
        .events()
        .iter()
        .filter(|e| matches!(e.kind, SimEventKind::EffectRenewed { .. }))
        .count();
    let paid: i32 = sim
        .events()
        .events()
        .iter()
        .filter_map(|e| match e.kind {
            SimEventKind::EffectRenewed { cost_paid, .. } => Some(cost_paid),
            _ => None,
        })
        .sum();
    println!("  {renewals} renewals, {paid} XP spent in total");
    println!();

    // Wearer status table
    println!("  {}", "Wearer Status".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Wearer", "XP", "Active effects", "Rings"]);

    for wearer in sim.roster().iter() {
        let xp = wearer
            .ledger
            .as_ref()
            .map_or_else(|| "exempt".to_string(), |p| p.points().to_string());

        let effects = if wearer.effects.is_empty() {
            "none".to_string()
        } else {
            wearer
                .effects
                .iter()
                .map(|e| format!("{} {:.0}s", e.effect, e.remaining_secs))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let rings = wearer
            .rings
            .iter()
            .map(format_ring)
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![wearer.name.clone(), xp, effects, rings]);
    }

    println!("{table}");

    Ok(())
}

fn build_roster(scenario: &Scenario) -> Result<Roster, String> {
    let mut roster = Roster::new(RosterMeta::new(&scenario.name));

    for spec in &scenario.wearers {
        let mut wearer = Wearer::new(&spec.name);
        if let Some(xp) = spec.xp {
            wearer = wearer.with_xp(xp);
        }
        for ring in &spec.rings {
            let config = RingConfig::new(
                EffectId::new(&ring.effect),
                ring.amplifier,
                ring.cost,
                ring.length,
                ring.renew,
            )
            .map_err(|e| format!("invalid ring for {}: {e}", spec.name))?
            .with_enabled(ring.enabled);
            wearer.wear(config);
        }
        roster
            .add_wearer(wearer)
            .map_err(|e| format!("cannot add wearer: {e}"))?;
    }

    Ok(roster)
}

fn format_ring(ring: &RingConfig) -> String {
    let state = if ring.shows_glint() {
        "active"
    } else {
        "inactive"
    };
    if ring.is_metered() {
        format!("{} ({} XP, {state})", ring.effect, ring.cost)
    } else {
        format!("{} (creative, {state})", ring.effect)
    }
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::EffectRenewed { .. } => description.green(),
        SimEventKind::RenewalDenied { .. } => description.yellow(),
        SimEventKind::EffectExpired { .. } => description.red(),
        SimEventKind::RingToggled { .. } => description.cyan(),
        SimEventKind::Custom { .. } => description.normal(),
    }
}
