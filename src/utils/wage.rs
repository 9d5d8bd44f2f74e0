use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::error::ApiError;
use crate::model::attendance::AttendanceStatus;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Error, PartialEq)]
pub enum ShiftError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Clock-in time is required when clock-out is given")]
    MissingClockIn,

    #[error("Clock-out time must be after clock-in time")]
    ClockOutBeforeClockIn,

    #[error("Clock-in and clock-out must be on the same day")]
    DifferentDays,
}

impl From<ShiftError> for ApiError {
    fn from(e: ShiftError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

/// Outcome of one day's clock-in/clock-out pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub wage_earned: f64,
    pub status: AttendanceStatus,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parses RFC 3339 (converted to local wall time) or a naive local timestamp.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ShiftError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| ShiftError::InvalidTimestamp(raw.to_string()))
}

/// Wage for `hours` against a full-day rate.
pub fn wage_for(hours: f64, daily_wage_rate: f64, standard_day_hours: f64) -> f64 {
    daily_wage_rate * hours / standard_day_hours
}

pub fn compute_shift(
    clock_in: Option<&str>,
    clock_out: Option<&str>,
    daily_wage_rate: f64,
    standard_day_hours: f64,
    today: NaiveDate,
) -> Result<Shift, ShiftError> {
    let clock_in = clock_in.map(parse_timestamp).transpose()?;
    let clock_out = clock_out.map(parse_timestamp).transpose()?;

    match (clock_in, clock_out) {
        (Some(start), Some(end)) => {
            if start.date() != end.date() {
                return Err(ShiftError::DifferentDays);
            }
            if end <= start {
                return Err(ShiftError::ClockOutBeforeClockIn);
            }

            let hours = (end - start).num_seconds() as f64 / 3600.0;
            Ok(Shift {
                date: start.date(),
                hours_worked: round2(hours),
                wage_earned: round2(wage_for(hours, daily_wage_rate, standard_day_hours)),
                status: AttendanceStatus::Present,
            })
        }
        (Some(start), None) => Ok(Shift {
            date: start.date(),
            hours_worked: 0.0,
            wage_earned: 0.0,
            status: AttendanceStatus::ClockedIn,
        }),
        (None, Some(_)) => Err(ShiftError::MissingClockIn),
        (None, None) => Ok(Shift {
            date: today,
            hours_worked: 0.0,
            wage_earned: 0.0,
            status: AttendanceStatus::Absent,
        }),
    }
}
