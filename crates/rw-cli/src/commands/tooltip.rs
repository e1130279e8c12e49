use std::path::Path;

use colored::Colorize;

use rw_core::display::tooltip_lines;
use rw_core::tags::from_tags;

pub fn run(file: &Path, pack_path: &Path) -> Result<(), String> {
    let tags = super::load_tags(file)?;
    let pack = super::load_pack(pack_path)?;
    let registry = pack.registry();

    // A decode failure still renders — as the degraded warning lines.
    let degraded = from_tags(&tags).is_err();

    for line in tooltip_lines(&tags, &registry) {
        if degraded {
            println!("  {}", line.red().bold());
        } else {
            println!("  {line}");
        }
    }

    Ok(())
}
