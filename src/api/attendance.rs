use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::{
    config::Config,
    error::ApiError,
    model::{attendance::AttendanceRecord, worker::Worker},
    models::MarkAttendance,
    utils::wage::compute_shift,
};

const RECORD_COLUMNS: &str = "id, worker_id, worker_name, date, clock_in, clock_out, \
                              hours_worked, wage_earned, status, created_at";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub(crate) async fn records_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let sql = format!(
        "SELECT {} FROM attendance WHERE date = ? ORDER BY created_at, rowid",
        RECORD_COLUMNS
    );
    let records = sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(date)
        .fetch_all(pool)
        .await?;
    Ok(records)
}

/// Mark attendance
///
/// Marking the same worker twice on one date replaces the earlier record.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceRecord),
        (status = 400, description = "Invalid time range", body = Object, example = json!({
            "detail": "Clock-out time must be after clock-in time"
        })),
        (status = 404, description = "Worker not found", body = Object, example = json!({
            "detail": "Worker not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    payload: web::Json<MarkAttendance>,
) -> Result<impl Responder, ApiError> {
    let payload = payload.into_inner();
    let clock_in = non_blank(payload.clock_in);
    let clock_out = non_blank(payload.clock_out);

    let worker = sqlx::query_as::<_, Worker>(
        r#"
        SELECT id, name, worker_id, daily_wage_rate, created_at
        FROM workers
        WHERE id = ? OR worker_id = ?
        LIMIT 1
        "#,
    )
    .bind(payload.worker_id.trim())
    .bind(payload.worker_id.trim())
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or_else(ApiError::worker_not_found)?;

    let shift = compute_shift(
        clock_in.as_deref(),
        clock_out.as_deref(),
        worker.daily_wage_rate,
        config.standard_day_hours,
        Local::now().date_naive(),
    )?;

    let sql = format!(
        r#"
        INSERT INTO attendance ({})
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (worker_id, date) DO UPDATE SET
            worker_name = excluded.worker_name,
            clock_in = excluded.clock_in,
            clock_out = excluded.clock_out,
            hours_worked = excluded.hours_worked,
            wage_earned = excluded.wage_earned,
            status = excluded.status,
            created_at = excluded.created_at
        "#,
        RECORD_COLUMNS
    );

    sqlx::query(&sql)
        .bind(Uuid::new_v4().to_string())
        .bind(&worker.id)
        .bind(&worker.name)
        .bind(shift.date)
        .bind(&clock_in)
        .bind(&clock_out)
        .bind(shift.hours_worked)
        .bind(shift.wage_earned)
        .bind(shift.status)
        .bind(Utc::now())
        .execute(pool.get_ref())
        .await?;

    let select = format!(
        "SELECT {} FROM attendance WHERE worker_id = ? AND date = ?",
        RECORD_COLUMNS
    );
    let record = sqlx::query_as::<_, AttendanceRecord>(&select)
        .bind(&worker.id)
        .bind(shift.date)
        .fetch_one(pool.get_ref())
        .await?;

    info!(
        worker_id = %worker.worker_id,
        date = %record.date,
        status = %record.status,
        hours = record.hours_worked,
        "Attendance marked"
    );

    Ok(HttpResponse::Ok().json(record))
}

/// Today's attendance
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    responses(
        (status = 200, description = "Records for the server's current date", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn today_attendance(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    let records = records_for_date(pool.get_ref(), Local::now().date_naive()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Attendance for a date
#[utoipa::path(
    get,
    path = "/api/attendance/date/{date}",
    params(
        ("date", Path, description = "Date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Records for the date", body = [AttendanceRecord]),
        (status = 400, description = "Malformed date")
    ),
    tag = "Attendance"
)]
pub async fn attendance_by_date(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let raw = path.into_inner();
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request(format!("Invalid date: {raw}")))?;

    let records = records_for_date(pool.get_ref(), date).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Attendance history of one worker, newest first
#[utoipa::path(
    get,
    path = "/api/attendance/worker/{id}",
    params(
        ("id", Path, description = "Internal worker id")
    ),
    responses(
        (status = 200, description = "Worker's records", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn worker_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let worker_id = path.into_inner();

    let sql = format!(
        "SELECT {} FROM attendance WHERE worker_id = ? ORDER BY date DESC",
        RECORD_COLUMNS
    );
    let records = sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(&worker_id)
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(records))
}
