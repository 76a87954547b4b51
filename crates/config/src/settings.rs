use std::collections::{HashMap, HashSet};
use std::path::Path;

use color_eyre::{eyre::Context, Result};
use findmyshift::StaffRecord;
use serde::{Deserialize, Serialize};

use crate::overrides::filter_employees;

pub const DEFAULT_SETTINGS_PATH: &str = "./settings.json";

/// Local overrides applied to every export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Staff ids never exported.
    #[serde(default)]
    pub blacklist: HashSet<String>,

    /// Staff id -> display name to use instead of the API one.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// FS Methods
impl Settings {
    /// Read from file-system. A missing or malformed file is an error.
    pub async fn read(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("unable to read settings from {}", path.display()))?;

        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings in {}", path.display()))?;

        tracing::debug!(
            blacklist = settings.blacklist.len(),
            aliases = settings.aliases.len(),
            "settings loaded"
        );

        Ok(settings)
    }
}

impl Settings {
    pub fn apply(&self, employees: Vec<StaffRecord>) -> Vec<StaffRecord> {
        filter_employees(employees, &self.blacklist, &self.aliases)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_are_optional() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings = serde_json::from_str(r#"{"blacklist": ["9"]}"#).unwrap();
        assert!(settings.blacklist.contains("9"));
        assert!(settings.aliases.is_empty());
    }

    #[test]
    fn parses_aliases() {
        let settings: Settings =
            serde_json::from_str(r#"{"aliases": {"1": "Annie"}, "blacklist": []}"#).unwrap();

        assert_eq!(settings.aliases.get("1").map(String::as_str), Some("Annie"));
    }

    #[test]
    fn apply_uses_both_lists() {
        let settings = Settings {
            blacklist: ["2".to_string()].into(),
            aliases: [("1".to_string(), "Annie".to_string())].into(),
        };

        let out = settings.apply(vec![
            StaffRecord::new("1", "Ann"),
            StaffRecord::new("2", "Bo"),
        ]);

        assert_eq!(out, vec![StaffRecord::new("1", "Annie")]);
    }
}
