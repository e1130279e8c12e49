use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use rw_core::catalog::{CatalogConfig, enumerate};
use rw_core::display::potency_numeral;

pub fn run(pack_path: &Path, cost: i32) -> Result<(), String> {
    let pack = super::load_pack(pack_path)?;
    let registry = pack.registry();

    let config = CatalogConfig {
        default_cost: cost,
        ..CatalogConfig::default()
    };
    let seeds = enumerate(&registry, &pack.potions, &config)
        .map_err(|e| format!("enumeration failed: {e}"))?;

    if seeds.is_empty() {
        println!("  No eligible ring variants.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Effect", "Upkeep", "Duration", "Renews under"]);

    for seed in &seeds {
        let name = registry
            .get(&seed.effect)
            .map_or_else(|| seed.effect.to_string(), |d| d.name.clone());
        let potency = potency_numeral(seed.amplifier);
        let effect = if potency.is_empty() {
            name
        } else {
            format!("{name} {potency}")
        };

        let upkeep = if seed.cost > 0 {
            format!("{} XP", seed.cost)
        } else {
            "creative".to_string()
        };

        table.add_row(vec![
            effect,
            upkeep,
            format!("{}s", seed.duration_secs),
            format!("{}s", seed.renew_threshold_secs),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} ring variants from {} potions",
        seeds.len().to_string().bold(),
        pack.potions.len()
    );

    Ok(())
}
