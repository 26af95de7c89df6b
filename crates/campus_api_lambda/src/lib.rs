//! AWS-oriented adapters and handlers for the campus API.
//!
//! This crate owns runtime integration details (Lambda handlers, API Gateway
//! event decoding, DynamoDB and S3 adapters, configuration, and logging).
//! Validation rules and request/response contracts come from
//! `campus_api_core`.

pub mod adapters;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
