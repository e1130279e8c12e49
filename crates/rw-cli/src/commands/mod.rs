pub mod catalog;
pub mod simulate;
pub mod tooltip;

use std::fs;
use std::path::Path;

use rw_core::catalog::ContentPack;
use rw_core::tags::TagMap;

/// Load and parse a content pack JSON file.
fn load_pack(path: &Path) -> Result<ContentPack, String> {
    load_json(path)
}

/// Load and parse a ring tag map JSON file.
fn load_tags(path: &Path) -> Result<TagMap, String> {
    load_json(path)
}

/// Load any JSON file into a deserializable value with a readable error.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {}: {e}", path.display()))
}
