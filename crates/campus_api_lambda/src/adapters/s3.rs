use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_object::GetObjectError;

use crate::adapters::object_store::{AssetStore, ObjectStoreError};

#[derive(Debug, Clone)]
pub struct S3AssetStore {
    s3_client: aws_sdk_s3::Client,
}

impl S3AssetStore {
    pub fn new(s3_client: aws_sdk_s3::Client) -> Self {
        Self { s3_client }
    }
}

impl AssetStore for S3AssetStore {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError> {
        let client = self.s3_client.clone();
        let bucket_name = bucket.to_string();
        let object_key = key.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_object()
                    .bucket(&bucket_name)
                    .key(&object_key)
                    .send()
                    .await
                    .map_err(|error| {
                        if error
                            .as_service_error()
                            .is_some_and(GetObjectError::is_no_such_key)
                        {
                            ObjectStoreError::NotFound {
                                bucket: bucket_name.clone(),
                                key: object_key.clone(),
                            }
                        } else {
                            ObjectStoreError::Backend {
                                bucket: bucket_name.clone(),
                                key: object_key.clone(),
                                message: DisplayErrorContext(&error).to_string(),
                            }
                        }
                    })?;

                let body = output
                    .body
                    .collect()
                    .await
                    .map_err(|error| ObjectStoreError::Backend {
                        bucket: bucket_name.clone(),
                        key: object_key.clone(),
                        message: format!("failed to read object body: {error}"),
                    })?;

                Ok(body.into_bytes().to_vec())
            })
        })
    }
}
