use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateWorker {
    #[schema(example = "Asha")]
    pub name: String,
    #[schema(example = "W001")]
    pub worker_id: String,
    #[schema(example = 500.0)]
    pub daily_wage_rate: f64,
}

/// Partial update. `worker_id` is accepted for wire compatibility but never applied.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateWorker {
    #[schema(example = "Asha K")]
    pub name: Option<String>,
    #[schema(example = "W001")]
    pub worker_id: Option<String>,
    #[schema(example = 550.0)]
    pub daily_wage_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    /// Internal id or display code of the worker
    #[schema(example = "W001")]
    pub worker_id: String,
    #[schema(example = "2026-01-05T09:00:00+05:30", nullable = true)]
    pub clock_in: Option<String>,
    #[schema(example = "2026-01-05T17:00:00+05:30", nullable = true)]
    pub clock_out: Option<String>,
}
