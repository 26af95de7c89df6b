pub mod dynamodb;
pub mod key_value_store;
pub mod object_store;
pub mod s3;
