use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use sqlx::SqlitePool;

use crate::{
    api::attendance::records_for_date,
    error::ApiError,
    model::{attendance::AttendanceRecord, report::DashboardStats},
    utils::wage::round2,
};

pub(crate) fn summarize(total_workers: i64, today: &[AttendanceRecord]) -> DashboardStats {
    let present_today = today.iter().filter(|a| a.status.is_on_site()).count() as i64;

    DashboardStats {
        total_workers,
        present_today,
        absent_today: (total_workers - present_today).max(0),
        total_hours_today: round2(today.iter().map(|a| a.hours_worked).sum()),
        total_wages_today: round2(today.iter().map(|a| a.wage_earned).sum()),
    }
}

/// Dashboard stats for today
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Today's snapshot", body = DashboardStats)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_stats(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    let total_workers = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workers")
        .fetch_one(pool.get_ref())
        .await?;

    let today = records_for_date(pool.get_ref(), Local::now().date_naive()).await?;

    Ok(HttpResponse::Ok().json(summarize(total_workers, &today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus;
    use chrono::{NaiveDate, Utc};

    fn record(status: AttendanceStatus, hours: f64, wage: f64) -> AttendanceRecord {
        AttendanceRecord {
            id: "a".into(),
            worker_id: "w".into(),
            worker_name: "n".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            clock_in: None,
            clock_out: None,
            hours_worked: hours,
            wage_earned: wage,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn clocked_in_counts_as_present() {
        let stats = summarize(
            4,
            &[
                record(AttendanceStatus::Present, 8.0, 500.0),
                record(AttendanceStatus::ClockedIn, 0.0, 0.0),
                record(AttendanceStatus::Absent, 0.0, 0.0),
            ],
        );

        assert_eq!(stats.present_today, 2);
        assert_eq!(stats.absent_today, 2);
        assert_eq!(stats.total_hours_today, 8.0);
        assert_eq!(stats.total_wages_today, 500.0);
    }

    #[test]
    fn no_workers_means_nothing_absent() {
        assert_eq!(summarize(0, &[]), DashboardStats::default());
    }
}
