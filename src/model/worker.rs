use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "5f0c7a52-3d1e-4b8f-9a61-0f2d9c1b7e44",
        "name": "Asha",
        "worker_id": "W001",
        "daily_wage_rate": 500.0,
        "created_at": "2026-01-01T08:00:00Z"
    })
)]
pub struct Worker {
    /// Internal id assigned by the server
    #[schema(example = "5f0c7a52-3d1e-4b8f-9a61-0f2d9c1b7e44")]
    pub id: String,

    #[schema(example = "Asha")]
    pub name: String,

    /// Display code, fixed once the worker exists
    #[schema(example = "W001")]
    pub worker_id: String,

    #[schema(example = 500.0)]
    pub daily_wage_rate: f64,

    #[schema(example = "2026-01-01T08:00:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
