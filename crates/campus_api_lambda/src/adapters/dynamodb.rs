use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use campus_api_core::stored_value::{Record, StoredValue};

use crate::adapters::key_value_store::{KeyValueStore, StoreError};

/// A DynamoDB table behind the synchronous [`KeyValueStore`] seam.
///
/// Calls bridge onto the SDK with `block_in_place`, so they must run on the
/// multi-threaded Tokio runtime the Lambda binaries start.
#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbTable {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl KeyValueStore for DynamoDbTable {
    fn get_record(&self, key: &Record) -> Result<Option<Record>, StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = to_attribute_map(key);

        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_item()
                    .table_name(table_name)
                    .set_key(Some(key))
                    .consistent_read(true)
                    .send()
                    .await
            })
        })
        .map_err(|error| StoreError::Read {
            table: self.table_name.clone(),
            message: DisplayErrorContext(&error).to_string(),
        })?;

        output
            .item()
            .map(|item| from_attribute_map(&self.table_name, item))
            .transpose()
    }

    fn put_record(&self, record: &Record) -> Result<(), StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = to_attribute_map(record);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
            })
        })
        .map_err(|error| StoreError::Write {
            table: self.table_name.clone(),
            message: DisplayErrorContext(&error).to_string(),
        })
    }
}

pub fn to_attribute_map(record: &Record) -> HashMap<String, AttributeValue> {
    record
        .iter()
        .map(|(name, value)| (name.clone(), to_attribute_value(value)))
        .collect()
}

pub fn to_attribute_value(value: &StoredValue) -> AttributeValue {
    match value {
        StoredValue::String(text) => AttributeValue::S(text.clone()),
        StoredValue::Number(text) => AttributeValue::N(text.clone()),
        StoredValue::Bool(flag) => AttributeValue::Bool(*flag),
        StoredValue::Null => AttributeValue::Null(true),
        StoredValue::Binary(bytes) => AttributeValue::B(Blob::new(bytes.clone())),
        StoredValue::List(values) => {
            AttributeValue::L(values.iter().map(to_attribute_value).collect())
        }
        StoredValue::Map(record) => AttributeValue::M(to_attribute_map(record)),
        StoredValue::StringSet(values) => AttributeValue::Ss(values.clone()),
        StoredValue::NumberSet(values) => AttributeValue::Ns(values.clone()),
        StoredValue::BinarySet(values) => AttributeValue::Bs(
            values
                .iter()
                .map(|bytes| Blob::new(bytes.clone()))
                .collect(),
        ),
    }
}

pub fn from_attribute_map(
    table: &str,
    item: &HashMap<String, AttributeValue>,
) -> Result<Record, StoreError> {
    let mut record = Record::new();
    for (name, value) in item {
        record.insert(name.clone(), from_attribute_value(table, name, value)?);
    }
    Ok(record)
}

fn from_attribute_value(
    table: &str,
    name: &str,
    value: &AttributeValue,
) -> Result<StoredValue, StoreError> {
    let stored = match value {
        AttributeValue::S(text) => StoredValue::String(text.clone()),
        AttributeValue::N(text) => StoredValue::Number(text.clone()),
        AttributeValue::Bool(flag) => StoredValue::Bool(*flag),
        AttributeValue::Null(_) => StoredValue::Null,
        AttributeValue::B(blob) => StoredValue::Binary(blob.as_ref().to_vec()),
        AttributeValue::L(values) => StoredValue::List(
            values
                .iter()
                .map(|value| from_attribute_value(table, name, value))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => StoredValue::Map(from_attribute_map(table, map)?),
        AttributeValue::Ss(values) => StoredValue::StringSet(values.clone()),
        AttributeValue::Ns(values) => StoredValue::NumberSet(values.clone()),
        AttributeValue::Bs(values) => StoredValue::BinarySet(
            values.iter().map(|blob| blob.as_ref().to_vec()).collect(),
        ),
        _ => {
            return Err(StoreError::UnsupportedAttribute {
                table: table.to_string(),
                attribute: name.to_string(),
            })
        }
    };
    Ok(stored)
}
