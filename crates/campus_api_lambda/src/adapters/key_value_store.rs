use campus_api_core::stored_value::Record;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("failed to read from table {table}: {message}")]
    Read { table: String, message: String },
    #[error("failed to write to table {table}: {message}")]
    Write { table: String, message: String },
    #[error("table {table} returned an unsupported attribute '{attribute}'")]
    UnsupportedAttribute { table: String, attribute: String },
}

/// Point reads and writes against one key-value table.
pub trait KeyValueStore {
    fn get_record(&self, key: &Record) -> Result<Option<Record>, StoreError>;

    fn put_record(&self, record: &Record) -> Result<(), StoreError>;
}
