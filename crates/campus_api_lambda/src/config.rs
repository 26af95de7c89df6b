use campus_api_core::schedule::ResponseProfile;
use campus_api_core::storage_keys::DEFAULT_ASSET_KEY;
use thiserror::Error;

pub const SCHEDULE_TABLE_VAR: &str = "TABLE_NAME";
pub const ITEMS_TABLE_VAR: &str = "ITEMS_TABLE_NAME";
pub const ASSET_BUCKET_VAR: &str = "ASSET_BUCKET";
pub const ASSET_KEY_VAR: &str = "ASSET_KEY";
pub const RESPONSE_PROFILE_VAR: &str = "SCHEDULE_RESPONSE_PROFILE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{variable} must be configured")]
    Missing { variable: &'static str },
}

/// Deployment settings, read once when a Lambda process starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub schedule_table: Option<String>,
    pub items_table: Option<String>,
    pub asset_bucket: Option<String>,
    pub asset_key: String,
    pub response_profile: ResponseProfile,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let response_profile = match read(RESPONSE_PROFILE_VAR) {
            None => ResponseProfile::default(),
            Some(raw) => ResponseProfile::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    component = "config",
                    event = "unknown_response_profile",
                    value = %raw,
                    fallback = ResponseProfile::default().as_str(),
                    "unrecognised schedule response profile"
                );
                ResponseProfile::default()
            }),
        };

        Self {
            schedule_table: read(SCHEDULE_TABLE_VAR),
            items_table: read(ITEMS_TABLE_VAR),
            asset_bucket: read(ASSET_BUCKET_VAR),
            asset_key: read(ASSET_KEY_VAR).unwrap_or_else(|| DEFAULT_ASSET_KEY.to_string()),
            response_profile,
        }
    }

    pub fn schedule_table(&self) -> Result<&str, ConfigError> {
        self.schedule_table.as_deref().ok_or(ConfigError::Missing {
            variable: SCHEDULE_TABLE_VAR,
        })
    }

    pub fn items_table(&self) -> Result<&str, ConfigError> {
        self.items_table.as_deref().ok_or(ConfigError::Missing {
            variable: ITEMS_TABLE_VAR,
        })
    }
}
