use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schedule::{Day, ScheduleQuery, Timeslot};

/// Course value reported when no class is scheduled for a slot.
pub const NO_COURSE_SENTINEL: &str = "0";
pub const ITEM_CREATED_MESSAGE: &str = "Item created successfully";
pub const GREETING_MESSAGE: &str = "Hello from the campus API!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduleLookupResponse {
    pub day: Day,
    pub timeslot: Timeslot,
    pub course: String,
}

impl ScheduleLookupResponse {
    pub fn new(query: ScheduleQuery, course: impl Into<String>) -> Self {
        Self {
            day: query.day,
            timeslot: query.timeslot,
            course: course.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompactScheduleLookupResponse {
    pub course: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemCreatedResponse {
    pub message: String,
    pub id: String,
    pub item: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
}
