use campus_api_core::contract::ValidationError;
use thiserror::Error;

use crate::adapters::key_value_store::StoreError;
use crate::adapters::object_store::ObjectStoreError;
use crate::config::ConfigError;

/// Every way a handler can fail. Each handler maps these to its own status
/// codes; none of them escape as a Lambda invocation error.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
    #[error("{resource} not found")]
    NotFound { resource: String },
    #[error("storage failure: {message}")]
    Storage { message: String },
    #[error(transparent)]
    Misconfiguration(#[from] ConfigError),
    #[error("Unsupported method/path: {method} {path}")]
    UnsupportedRoute { method: String, path: String },
}

impl From<StoreError> for HandlerError {
    fn from(error: StoreError) -> Self {
        Self::Storage {
            message: error.to_string(),
        }
    }
}

impl From<ObjectStoreError> for HandlerError {
    fn from(error: ObjectStoreError) -> Self {
        match error {
            ObjectStoreError::NotFound { key, .. } => Self::NotFound { resource: key },
            ObjectStoreError::Backend { .. } => Self::Storage {
                message: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ITEMS_TABLE_VAR;

    #[test]
    fn missing_object_is_distinguished_from_backend_failure() {
        let missing = HandlerError::from(ObjectStoreError::NotFound {
            bucket: "site".to_string(),
            key: "index.html".to_string(),
        });
        assert!(
            matches!(missing, HandlerError::NotFound { ref resource } if resource == "index.html")
        );

        let failed = HandlerError::from(ObjectStoreError::Backend {
            bucket: "site".to_string(),
            key: "index.html".to_string(),
            message: "access denied".to_string(),
        });
        assert!(matches!(
            failed,
            HandlerError::Storage { ref message } if message.contains("access denied")
        ));
    }

    #[test]
    fn missing_configuration_keeps_the_variable_name() {
        let error = HandlerError::from(ConfigError::Missing {
            variable: ITEMS_TABLE_VAR,
        });
        assert_eq!(error.to_string(), "ITEMS_TABLE_NAME must be configured");
        assert!(matches!(error, HandlerError::Misconfiguration(_)));
    }
}
