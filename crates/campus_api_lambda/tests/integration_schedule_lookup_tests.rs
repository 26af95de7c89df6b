mod support;

use campus_api_core::schedule::ResponseProfile;
use campus_api_core::stored_value::{Record, StoredValue};
use campus_api_lambda::handlers::schedule::handle_schedule_event;
use serde_json::{json, Value};
use support::{http_event, InMemoryTable};

fn schedule_table() -> InMemoryTable {
    let table = InMemoryTable::with_key_attributes(&["Day", "Timeslot"]);
    table.seed(Record::from([
        ("Day".to_string(), StoredValue::String("tue".to_string())),
        ("Timeslot".to_string(), StoredValue::Number("10.5".to_string())),
        ("Course".to_string(), StoredValue::String("MATH201".to_string())),
    ]));
    table
}

fn lookup_event(day: &str, timeslot: &str) -> Value {
    let mut event = http_event("GET", &format!("/schedule/{day}/{timeslot}"));
    event["pathParameters"] = json!({"day": day, "timeslot": timeslot});
    event
}

#[test]
fn scheduled_slot_returns_stored_course() {
    let table = schedule_table();
    let response =
        handle_schedule_event(lookup_event("TUE", "10.50"), &table, ResponseProfile::Detailed);

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.json_body(),
        Some(json!({"day": "tue", "timeslot": 10.5, "course": "MATH201"}))
    );
}

#[test]
fn neighbouring_slot_is_unscheduled() {
    let table = schedule_table();
    let response =
        handle_schedule_event(lookup_event("tue", "11"), &table, ResponseProfile::Detailed);

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.json_body().map(|body| body["course"].clone()),
        Some(json!("0"))
    );
}

#[test]
fn every_out_of_domain_input_is_rejected_before_storage() {
    let table = schedule_table();
    let cases = [
        ("tues", "10"),
        ("xyz", "10"),
        ("tue", "7.5"),
        ("tue", "16.5"),
        ("tue", "10.25"),
        ("tue", "ten"),
    ];

    for (day, timeslot) in cases {
        let response =
            handle_schedule_event(lookup_event(day, timeslot), &table, ResponseProfile::Detailed);
        assert_eq!(response.status_code, 404, "{day}/{timeslot} should be rejected");
    }
    assert_eq!(table.reads(), 0);
}

#[test]
fn boundary_slots_are_accepted() {
    let table = schedule_table();
    for timeslot in ["8", "8.0", "16", "16.0"] {
        let response =
            handle_schedule_event(lookup_event("sun", timeslot), &table, ResponseProfile::Compact);
        assert_eq!(response.status_code, 200, "{timeslot} should be accepted");
        assert_eq!(response.json_body(), Some(json!({"course": "0"})));
    }
    assert_eq!(table.reads(), 4);
}
