//! Header names the sheet adapter reads each field from.
//!
//! Defaults match the authoring spreadsheets. A TOML file may override any
//! subset, e.g.
//!
//! ```toml
//! trick_id = "ID"
//! small_keys = "Keys"
//! ```

use crate::error::SheetError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetColumns {
    // ── Loadout ──
    pub dream_breaker: String,
    pub strikebreak: String,
    pub soul_cutter: String,
    pub sunsetter: String,
    pub slide: String,
    pub solar_wind: String,
    pub ascendant_light: String,
    pub clings: String,
    pub kicks: String,
    pub small_keys: String,

    // ── Trick ──
    pub trick_id: String,
    pub tags: String,

    // ── Rule target ──
    pub location: String,
    pub region: String,
    pub connected_region: String,

    // ── Tag hierarchy sheet ──
    pub tag: String,
    pub child_tags: String,
}

impl Default for SheetColumns {
    fn default() -> Self {
        Self {
            dream_breaker: "Dream Breaker".to_string(),
            strikebreak: "Strikebreak".to_string(),
            soul_cutter: "Soul Cutter".to_string(),
            sunsetter: "Sunsetter".to_string(),
            slide: "Slide".to_string(),
            solar_wind: "Solar Wind".to_string(),
            ascendant_light: "Ascendant Light".to_string(),
            clings: "Clings".to_string(),
            kicks: "Kicks".to_string(),
            small_keys: "Small Keys".to_string(),
            trick_id: "Trick ID".to_string(),
            tags: "Tags".to_string(),
            location: "Location".to_string(),
            region: "Region".to_string(),
            connected_region: "Connected Region".to_string(),
            tag: "Tag".to_string(),
            child_tags: "Child Tags".to_string(),
        }
    }
}

impl SheetColumns {
    /// Parse overrides from TOML text; unspecified fields keep defaults.
    pub fn from_toml_str(text: &str, label: &str) -> Result<Self, SheetError> {
        toml::from_str(text).map_err(|source| SheetError::Columns {
            path: label.to_string(),
            source,
        })
    }

    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SheetError::io(path, e))?;
        Self::from_toml_str(&text, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sheet_headers() {
        let columns = SheetColumns::default();
        assert_eq!(columns.trick_id, "Trick ID");
        assert_eq!(columns.connected_region, "Connected Region");
        assert_eq!(columns.child_tags, "Child Tags");
    }

    #[test]
    fn toml_overrides_subset() {
        let text = "trick_id = \"ID\"\nsmall_keys = \"Keys\"\n";
        let columns = SheetColumns::from_toml_str(text, "inline").expect("toml should parse");
        assert_eq!(columns.trick_id, "ID");
        assert_eq!(columns.small_keys, "Keys");
        assert_eq!(columns.slide, "Slide");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = SheetColumns::from_toml_str("trick_name = \"ID\"\n", "inline");
        assert!(matches!(result, Err(SheetError::Columns { .. })));
    }
}
