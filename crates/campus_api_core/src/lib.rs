//! Shared campus API domain primitives.
//!
//! This crate owns request validation, storage key shapes, the stored-value
//! model, and request/response contracts. It excludes AWS SDK and Lambda
//! runtime concerns; those live in `campus_api_lambda`.

pub mod contract;
mod decimal;
pub mod items;
pub mod schedule;
pub mod storage_keys;
pub mod stored_value;
