use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectStoreError {
    #[error("object {key} does not exist in bucket {bucket}")]
    NotFound { bucket: String, key: String },
    #[error("failed to read object {key} from bucket {bucket}: {message}")]
    Backend {
        bucket: String,
        key: String,
        message: String,
    },
}

pub trait AssetStore {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError>;
}
