use crate::schedule::ScheduleQuery;
use crate::stored_value::{Record, StoredValue};

pub const SCHEDULE_DAY_ATTRIBUTE: &str = "Day";
pub const SCHEDULE_TIMESLOT_ATTRIBUTE: &str = "Timeslot";
pub const SCHEDULE_COURSE_ATTRIBUTE: &str = "Course";
pub const ITEM_ID_ATTRIBUTE: &str = "id";
pub const DEFAULT_ASSET_KEY: &str = "index.html";

/// Composite key `{Day: S, Timeslot: N}` for the schedule table.
pub fn schedule_key(query: &ScheduleQuery) -> Record {
    Record::from([
        (
            SCHEDULE_DAY_ATTRIBUTE.to_string(),
            StoredValue::String(query.day.as_str().to_string()),
        ),
        (
            SCHEDULE_TIMESLOT_ATTRIBUTE.to_string(),
            StoredValue::Number(query.timeslot.to_decimal_string()),
        ),
    ])
}

pub fn item_key(id: &str) -> Record {
    Record::from([(
        ITEM_ID_ATTRIBUTE.to_string(),
        StoredValue::String(id.to_string()),
    )])
}
