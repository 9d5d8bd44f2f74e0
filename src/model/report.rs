use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One worker's attendance and wages over a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MonthlyReportRow {
    pub worker_id: String,
    #[schema(example = "Asha")]
    pub worker_name: String,
    #[schema(example = "W001")]
    pub worker_number: String,
    #[schema(example = 500.0)]
    pub daily_wage_rate: f64,
    #[schema(example = 22)]
    pub total_days: i64,
    #[schema(example = 21)]
    pub present_days: i64,
    #[schema(example = 1)]
    pub absent_days: i64,
    #[schema(example = 168.0)]
    pub total_hours: f64,
    #[schema(example = 10500.0)]
    pub total_wages: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_workers: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub total_hours_today: f64,
    pub total_wages_today: f64,
}
