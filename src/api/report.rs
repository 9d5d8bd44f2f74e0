use actix_web::{HttpResponse, Responder, http::header, web};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::{debug, error};

use crate::{
    error::ApiError,
    export::{export_file_name, report_csv},
    model::report::MonthlyReportRow,
    utils::wage::round2,
};

/// First day of the month and first day of the following month.
pub(crate) fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let invalid = || ApiError::bad_request(format!("Invalid month: {year}-{month}"));

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((start, end))
}

pub(crate) async fn monthly_rows(
    pool: &SqlitePool,
    year: i32,
    month: u32,
) -> Result<Vec<MonthlyReportRow>, ApiError> {
    let (start, end) = month_bounds(year, month)?;

    let mut rows = sqlx::query_as::<_, MonthlyReportRow>(
        r#"
        SELECT
            w.id AS worker_id,
            w.name AS worker_name,
            w.worker_id AS worker_number,
            w.daily_wage_rate AS daily_wage_rate,
            CAST(COUNT(a.id) AS INTEGER) AS total_days,
            CAST(COALESCE(SUM(CASE WHEN a.status = 'present' THEN 1 ELSE 0 END), 0) AS INTEGER) AS present_days,
            CAST(0 AS INTEGER) AS absent_days,
            CAST(COALESCE(SUM(a.hours_worked), 0) AS REAL) AS total_hours,
            CAST(COALESCE(SUM(a.wage_earned), 0) AS REAL) AS total_wages
        FROM workers w
        LEFT JOIN attendance a
            ON a.worker_id = w.id
            AND a.date >= ?
            AND a.date < ?
        GROUP BY w.id
        ORDER BY w.created_at, w.rowid
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    for row in &mut rows {
        row.absent_days = (row.total_days - row.present_days).max(0);
        row.total_hours = round2(row.total_hours);
        row.total_wages = round2(row.total_wages);
    }

    debug!(year, month, rows = rows.len(), "Built monthly report");
    Ok(rows)
}

/// Monthly report
#[utoipa::path(
    get,
    path = "/api/attendance/monthly/{year}/{month}",
    params(
        ("year", Path, description = "Calendar year"),
        ("month", Path, description = "Month, 1 to 12")
    ),
    responses(
        (status = 200, description = "One row per worker", body = [MonthlyReportRow]),
        (status = 400, description = "Invalid month")
    ),
    tag = "Reports"
)]
pub async fn monthly_report(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i32, u32)>,
) -> Result<impl Responder, ApiError> {
    let (year, month) = path.into_inner();
    let rows = monthly_rows(pool.get_ref(), year, month).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Monthly report as CSV
#[utoipa::path(
    get,
    path = "/api/attendance/monthly/{year}/{month}/export",
    params(
        ("year", Path, description = "Calendar year"),
        ("month", Path, description = "Month, 1 to 12")
    ),
    responses(
        (status = 200, description = "CSV download", content_type = "text/csv", body = String),
        (status = 400, description = "Invalid month")
    ),
    tag = "Reports"
)]
pub async fn export_monthly_report(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i32, u32)>,
) -> Result<impl Responder, ApiError> {
    let (year, month) = path.into_inner();
    let rows = monthly_rows(pool.get_ref(), year, month).await?;

    let file_name = export_file_name(year, month)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid month: {year}-{month}")))?;
    let body = report_csv(&rows).map_err(|e| {
        error!(error = %e, year, month, "Failed to render report CSV");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(body))
}
