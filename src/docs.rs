use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::report::{DashboardStats, MonthlyReportRow};
use crate::model::worker::Worker;
use crate::models::{CreateWorker, MarkAttendance, UpdateWorker};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WageFlow API",
        version = "1.0.0",
        description = r#"
## WageFlow

Tracks workers, their daily attendance and the wages it earns.

### Key Features
- **Workers**
  - Create, list, view, rename or re-rate, and delete workers
- **Attendance**
  - Record a clock-in/clock-out pair per worker per day
  - Hours and wages are computed from the worker's daily wage rate
- **Reports**
  - Per-worker monthly totals, with CSV export
- **Dashboard**
  - Today's headcount, hours and wages

### Response Format
- JSON everywhere except the CSV export
- Errors are `{"detail": "<message>"}`
"#,
    ),
    paths(
        crate::api::site::index,

        crate::api::worker::create_worker,
        crate::api::worker::list_workers,
        crate::api::worker::get_worker,
        crate::api::worker::update_worker,
        crate::api::worker::delete_worker,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::today_attendance,
        crate::api::attendance::attendance_by_date,
        crate::api::attendance::worker_attendance,

        crate::api::report::monthly_report,
        crate::api::report::export_monthly_report,

        crate::api::dashboard::dashboard_stats
    ),
    components(
        schemas(
            Worker,
            CreateWorker,
            UpdateWorker,
            AttendanceRecord,
            AttendanceStatus,
            MarkAttendance,
            MonthlyReportRow,
            DashboardStats
        )
    ),
    tags(
        (name = "Service", description = "Service banner"),
        (name = "Workers", description = "Worker management APIs"),
        (name = "Attendance", description = "Attendance APIs"),
        (name = "Reports", description = "Monthly wage report APIs"),
        (name = "Dashboard", description = "Dashboard APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api",
            "/api/workers",
            "/api/workers/{id}",
            "/api/attendance",
            "/api/attendance/today",
            "/api/attendance/date/{date}",
            "/api/attendance/worker/{id}",
            "/api/attendance/monthly/{year}/{month}",
            "/api/attendance/monthly/{year}/{month}/export",
            "/api/dashboard/stats",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
