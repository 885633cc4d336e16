//! Configuration and reference data, loaded from TOML.

use mobigate_governance::{DemocraticPrivacySetting, GovernanceError, InMemoryPrivacyStore};
use mobigate_nomination::{FeeSchedule, NominationError, NominationFeeStructure};
use mobigate_types::CommunityParams;
use mobigate_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("invalid fee schedule: {0}")]
    Nomination(#[from] NominationError),

    #[error("invalid privacy settings: {0}")]
    Governance(#[from] GovernanceError),
}

/// Everything the binary reads at startup.
///
/// Empty `offices` / `privacy_settings` fall back to the built-in community
/// defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_service_charge_percent")]
    pub service_charge_percent: u32,

    #[serde(default)]
    pub offices: Vec<NominationFeeStructure>,

    #[serde(default)]
    pub privacy_settings: Vec<DemocraticPrivacySetting>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_service_charge_percent() -> u32 {
    CommunityParams::DEFAULT_SERVICE_CHARGE_PERCENT
}

impl AppConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn params(&self) -> CommunityParams {
        CommunityParams {
            service_charge_percent: self.service_charge_percent,
        }
    }

    pub fn fee_schedule(&self) -> Result<FeeSchedule, ConfigError> {
        if self.offices.is_empty() {
            return Ok(FeeSchedule::community_defaults(self.params()));
        }
        Ok(FeeSchedule::with_offices(
            self.params(),
            self.offices.iter().cloned(),
        )?)
    }

    pub fn privacy_store(&self) -> Result<InMemoryPrivacyStore, ConfigError> {
        let settings = if self.privacy_settings.is_empty() {
            DemocraticPrivacySetting::community_defaults()
        } else {
            self.privacy_settings.clone()
        };
        Ok(InMemoryPrivacyStore::with_settings(settings)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            service_charge_percent: default_service_charge_percent(),
            offices: Vec::new(),
            privacy_settings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobigate_governance::{PrivacySettingStore, PrivacyVisibilityOption};
    use mobigate_types::{MobiAmount, SettingId};
    use std::io::Write;

    const SAMPLE: &str = r#"
        log_format = "json"
        service_charge_percent = 10

        [[offices]]
        office_id = "chairman"
        office_name = "Chairman"
        office_description = "Chairs the board"
        category = "executive"
        nomination_fee = 40000
        processing_fee = 4000
        total_fee = 44000
        requires_primary = true

        [[privacy_settings]]
        setting_id = "phone-visibility"
        setting_name = "Phone Number"
        total_votes = 10
        current_value = "only_admins"

        [privacy_settings.vote_counts]
        nobody = 1
        only_admins = 5
        valid_members = 2
        all_members = 2
    "#;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.service_charge_percent, 5);

        let schedule = config.fee_schedule().unwrap();
        let b = schedule.compute_cost_breakdown("president-general").unwrap();
        assert_eq!(b.total_debited, MobiAmount::new(57_750));

        let store = config.privacy_store().unwrap();
        assert_eq!(store.list().unwrap().len(), 5);
    }

    #[test]
    fn reference_data_replaces_defaults() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);

        let schedule = config.fee_schedule().unwrap();
        assert_eq!(schedule.len(), 1);
        assert!(schedule.get_fee_structure("president-general").is_none());
        let b = schedule.compute_cost_breakdown("chairman").unwrap();
        assert_eq!(b.service_charge, MobiAmount::new(4_400));
        assert_eq!(b.total_debited, MobiAmount::new(48_400));

        let store = config.privacy_store().unwrap();
        let snap = store
            .load(&SettingId::new("phone-visibility"), None)
            .unwrap();
        assert_eq!(snap.setting.total_votes, 10);
        assert_eq!(snap.setting.current_value, PrivacyVisibilityOption::OnlyAdmins);
    }

    #[test]
    fn inconsistent_reference_data_rejected() {
        let bad = SAMPLE.replace("total_fee = 44000", "total_fee = 1");
        let config = AppConfig::from_toml_str(&bad).unwrap();
        assert!(matches!(
            config.fee_schedule(),
            Err(ConfigError::Nomination(NominationError::InconsistentTotal { .. }))
        ));

        let bad = SAMPLE.replace("total_votes = 10", "total_votes = 11");
        let config = AppConfig::from_toml_str(&bad).unwrap();
        assert!(matches!(
            config.privacy_store(),
            Err(ConfigError::Governance(GovernanceError::InconsistentTally { .. }))
        ));
    }

    #[test]
    fn unknown_option_is_a_parse_error() {
        let bad = SAMPLE.replace("\"only_admins\"", "\"everyone\"");
        assert!(matches!(
            AppConfig::from_toml_str(&bad),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        let text = config.to_toml_string().unwrap();
        let parsed = AppConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.offices, config.offices);
        assert_eq!(parsed.privacy_settings, config.privacy_settings);
        assert_eq!(parsed.service_charge_percent, 10);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = AppConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.offices.len(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::from_toml_file(&missing),
            Err(ConfigError::Read { .. })
        ));
    }
}
