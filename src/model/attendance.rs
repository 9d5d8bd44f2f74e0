use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    ClockedIn,
    Absent,
}

impl AttendanceStatus {
    /// Counts toward "present today" on the dashboard.
    pub fn is_on_site(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::ClockedIn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    pub id: String,

    /// Internal id of the worker
    pub worker_id: String,

    #[schema(example = "Asha")]
    pub worker_name: String,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "2026-01-05T09:00:00+05:30", nullable = true)]
    pub clock_in: Option<String>,

    #[schema(example = "2026-01-05T17:00:00+05:30", nullable = true)]
    pub clock_out: Option<String>,

    #[schema(example = 8.0)]
    pub hours_worked: f64,

    #[schema(example = 500.0)]
    pub wage_earned: f64,

    pub status: AttendanceStatus,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
