use std::fmt;

use serde::{Serialize, Serializer};

use crate::contract::ValidationError;
use crate::decimal::DecimalText;

/// Earliest bookable slot, in half hours since midnight (08:00).
pub const FIRST_SLOT_HALF_HOURS: u8 = 16;
/// Latest bookable slot, in half hours since midnight (16:00).
pub const LAST_SLOT_HALF_HOURS: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Accepts the three-letter code in any letter case. Surrounding
    /// whitespace is not part of any code.
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.to_ascii_lowercase();
        Self::ALL.into_iter().find(|day| day.as_str() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A half-hour aligned slot between 08:00 and 16:00 inclusive.
///
/// Held as a count of half hours so the storage key is always rendered from
/// exact decimal text and never from a binary float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timeslot {
    half_hours: u8,
}

impl Timeslot {
    pub fn from_half_hours(half_hours: u8) -> Option<Self> {
        (FIRST_SLOT_HALF_HOURS..=LAST_SLOT_HALF_HOURS)
            .contains(&half_hours)
            .then_some(Self { half_hours })
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_half_hours(raw).and_then(Self::from_half_hours)
    }

    pub fn half_hours(self) -> u8 {
        self.half_hours
    }

    /// Decimal text used for the numeric key component, e.g. `8` or `8.5`.
    pub fn to_decimal_string(self) -> String {
        let hours = self.half_hours / 2;
        if self.half_hours % 2 == 0 {
            hours.to_string()
        } else {
            format!("{hours}.5")
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.half_hours) / 2.0
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl Serialize for Timeslot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub day: Day,
    pub timeslot: Timeslot,
}

/// How much detail the schedule lookup echoes back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseProfile {
    /// Echo `day` and `timeslot` and explain validation failures.
    #[default]
    Detailed,
    /// Return only `course` and opaque error bodies.
    Compact,
}

impl ResponseProfile {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "detailed" => Some(Self::Detailed),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Compact => "compact",
        }
    }
}

pub fn validate_schedule_query(
    day: Option<&str>,
    timeslot: Option<&str>,
) -> Result<ScheduleQuery, ValidationError> {
    let day = day
        .and_then(Day::parse)
        .ok_or_else(|| ValidationError::new(format!("Invalid day: {}", day.unwrap_or(""))))?;

    let timeslot = timeslot.and_then(Timeslot::parse).ok_or_else(|| {
        ValidationError::new(format!(
            "Invalid timeslot: {}. Must be 8-16 in 0.5 increments.",
            timeslot.unwrap_or("")
        ))
    })?;

    Ok(ScheduleQuery { day, timeslot })
}

/// Converts decimal text (optionally with an exponent) into a whole number
/// of half hours. Returns `None` unless `value * 2` is an exact positive
/// integer that fits the slot range's order of magnitude.
fn parse_half_hours(raw: &str) -> Option<u8> {
    let decimal = DecimalText::parse(raw)?;
    if decimal.negative || decimal.is_zero() {
        return None;
    }

    // Anything with more than four significant digits is outside 8..=16.
    if decimal.significant.len() > 4 {
        return None;
    }
    let coefficient: u32 = decimal.significant.parse().ok()?;

    match decimal.scale {
        0 => u8::try_from(coefficient.checked_mul(2)?).ok(),
        scale @ (1 | 2) => {
            let value = coefficient.checked_mul(10u32.pow(scale.unsigned_abs()))?;
            u8::try_from(value.checked_mul(2)?).ok()
        }
        -1 if coefficient % 10 == 5 => u8::try_from(coefficient / 5).ok(),
        _ => None,
    }
}
