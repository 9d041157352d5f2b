use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::CliError;

/// Optional TOML profile supplying generate defaults.
///
/// Command-line flags always win over profile values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub out: Option<PathBuf>,
    pub rows: Option<u64>,
    pub format: Option<String>,
    pub sep: Option<String>,
    pub write_header: Option<bool>,
    pub seed: Option<u64>,
    pub base_date: Option<NaiveDate>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| CliError::InvalidConfig(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_profile() {
        let profile: Profile = toml::from_str(
            r#"
            out = "fixtures"
            rows = 25
            format = "json"
            sep = ";"
            write_header = false
            seed = 7
            base_date = "2024-03-01"
            "#,
        )
        .expect("valid profile");

        assert_eq!(profile.out, Some(PathBuf::from("fixtures")));
        assert_eq!(profile.rows, Some(25));
        assert_eq!(profile.format.as_deref(), Some("json"));
        assert_eq!(profile.write_header, Some(false));
        assert_eq!(
            profile.base_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<Profile, _> = toml::from_str("unknown = true");
        assert!(result.is_err());
    }
}
