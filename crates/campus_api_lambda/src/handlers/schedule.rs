use campus_api_core::contract::{
    CompactScheduleLookupResponse, ScheduleLookupResponse, ValidationError, NO_COURSE_SENTINEL,
};
use campus_api_core::schedule::{validate_schedule_query, ResponseProfile, ScheduleQuery};
use campus_api_core::storage_keys::{schedule_key, SCHEDULE_COURSE_ATTRIBUTE};
use campus_api_core::stored_value::StoredValue;
use serde_json::{json, Value};

use crate::adapters::key_value_store::KeyValueStore;
use crate::error::HandlerError;
use crate::handlers::event::HttpApiEvent;
use crate::handlers::response::{error_response, json_response, ApiGatewayResponse};

/// Status returned for an invalid day or timeslot.
pub const SCHEDULE_VALIDATION_STATUS: u16 = 404;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLookup {
    pub query: ScheduleQuery,
    pub course: String,
}

pub fn handle_schedule_event(
    event: Value,
    table: &impl KeyValueStore,
    profile: ResponseProfile,
) -> ApiGatewayResponse {
    match lookup_schedule(event, table) {
        Ok(lookup) => {
            tracing::info!(
                component = "schedule_handler",
                event = "lookup_completed",
                day = %lookup.query.day,
                timeslot = %lookup.query.timeslot,
                scheduled = lookup.course != NO_COURSE_SENTINEL,
                "schedule lookup completed"
            );
            match profile {
                ResponseProfile::Detailed => json_response(
                    200,
                    &ScheduleLookupResponse::new(lookup.query, lookup.course),
                ),
                ResponseProfile::Compact => json_response(
                    200,
                    &CompactScheduleLookupResponse {
                        course: lookup.course,
                    },
                ),
            }
        }
        Err(HandlerError::InvalidInput(error)) => {
            tracing::warn!(
                component = "schedule_handler",
                event = "validation_failed",
                error = %error,
                "rejected schedule lookup"
            );
            validation_error_response(&error, profile)
        }
        Err(error) => {
            tracing::error!(
                component = "schedule_handler",
                event = "lookup_failed",
                error = %error,
                "schedule lookup failed"
            );
            error_response(
                500,
                json!({
                    "error": "storage_error",
                    "message": "Internal database error during lookup.",
                }),
            )
        }
    }
}

/// Validates the path parameters and performs one point read. A missing
/// record, or one without a string `Course`, yields the no-course sentinel.
pub fn lookup_schedule(
    event: Value,
    table: &impl KeyValueStore,
) -> Result<ScheduleLookup, HandlerError> {
    let event = HttpApiEvent::from_value(event)?;
    let query = validate_schedule_query(
        event.path_parameter("day"),
        event.path_parameter("timeslot"),
    )?;

    let record = table.get_record(&schedule_key(&query))?;
    let course = record
        .as_ref()
        .and_then(|record| record.get(SCHEDULE_COURSE_ATTRIBUTE))
        .and_then(StoredValue::as_str)
        .unwrap_or(NO_COURSE_SENTINEL)
        .to_string();

    Ok(ScheduleLookup { query, course })
}

fn validation_error_response(
    error: &ValidationError,
    profile: ResponseProfile,
) -> ApiGatewayResponse {
    let body = match profile {
        ResponseProfile::Detailed => json!({
            "error": "validation_error",
            "message": error.message(),
        }),
        ResponseProfile::Compact => json!({
            "error": SCHEDULE_VALIDATION_STATUS.to_string(),
        }),
    };
    error_response(SCHEDULE_VALIDATION_STATUS, body)
}
