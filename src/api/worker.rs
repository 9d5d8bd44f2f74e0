use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::ApiError,
    model::worker::Worker,
    models::{CreateWorker, UpdateWorker},
    utils::{
        db_utils::{SqlValue, build_update_sql, execute_update},
        worker_codes::WorkerCodeIndex,
    },
};

const DUPLICATE_CODE: &str = "Worker ID already exists";

fn validate_name(name: &str) -> Result<String, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Worker name must not be empty"));
    }
    Ok(name.to_string())
}

fn validate_rate(rate: f64) -> Result<f64, ApiError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(ApiError::bad_request(
            "Daily wage rate must be a non-negative number",
        ));
    }
    Ok(rate)
}

pub(crate) async fn fetch_worker(pool: &SqlitePool, id: &str) -> Result<Option<Worker>, ApiError> {
    let worker = sqlx::query_as::<_, Worker>(
        "SELECT id, name, worker_id, daily_wage_rate, created_at FROM workers WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(worker)
}

/// Create Worker
#[utoipa::path(
    post,
    path = "/api/workers",
    request_body = CreateWorker,
    responses(
        (status = 200, description = "Worker created", body = Worker),
        (status = 400, description = "Duplicate worker code or invalid input", body = Object, example = json!({
            "detail": "Worker ID already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Workers"
)]
pub async fn create_worker(
    pool: web::Data<SqlitePool>,
    codes: web::Data<WorkerCodeIndex>,
    payload: web::Json<CreateWorker>,
) -> Result<impl Responder, ApiError> {
    let payload = payload.into_inner();
    let name = validate_name(&payload.name)?;
    let code = payload.worker_id.trim().to_string();
    if code.is_empty() {
        return Err(ApiError::bad_request("Worker ID must not be empty"));
    }
    let rate = validate_rate(payload.daily_wage_rate)?;

    if !codes.is_available(&code, pool.get_ref()).await? {
        return Err(ApiError::bad_request(DUPLICATE_CODE));
    }

    let worker = Worker {
        id: Uuid::new_v4().to_string(),
        name,
        worker_id: code,
        daily_wage_rate: rate,
        created_at: Utc::now(),
    };

    let result = sqlx::query(
        r#"
        INSERT INTO workers (id, name, worker_id, daily_wage_rate, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&worker.id)
    .bind(&worker.name)
    .bind(&worker.worker_id)
    .bind(worker.daily_wage_rate)
    .bind(worker.created_at)
    .execute(pool.get_ref())
    .await;

    if let Err(e) = result {
        // Lost a race with another create of the same code
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                codes.insert(&worker.worker_id).await;
                return Err(ApiError::bad_request(DUPLICATE_CODE));
            }
        }
        return Err(e.into());
    }

    codes.insert(&worker.worker_id).await;
    info!(id = %worker.id, worker_id = %worker.worker_id, "Worker created");

    Ok(HttpResponse::Ok().json(worker))
}

/// List Workers
#[utoipa::path(
    get,
    path = "/api/workers",
    responses(
        (status = 200, description = "All workers, oldest first", body = [Worker])
    ),
    tag = "Workers"
)]
pub async fn list_workers(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    let workers = sqlx::query_as::<_, Worker>(
        r#"
        SELECT id, name, worker_id, daily_wage_rate, created_at
        FROM workers
        ORDER BY created_at, rowid
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    debug!(count = workers.len(), "Fetched workers");
    Ok(HttpResponse::Ok().json(workers))
}

/// Get Worker by ID
#[utoipa::path(
    get,
    path = "/api/workers/{id}",
    params(
        ("id", Path, description = "Internal worker id")
    ),
    responses(
        (status = 200, description = "Worker found", body = Worker),
        (status = 404, description = "Worker not found", body = Object, example = json!({
            "detail": "Worker not found"
        }))
    ),
    tag = "Workers"
)]
pub async fn get_worker(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();

    match fetch_worker(pool.get_ref(), &id).await? {
        Some(worker) => Ok(HttpResponse::Ok().json(worker)),
        None => Err(ApiError::worker_not_found()),
    }
}

/// Update Worker
///
/// Only `name` and `daily_wage_rate` change. The worker code stays as created.
#[utoipa::path(
    put,
    path = "/api/workers/{id}",
    params(
        ("id", Path, description = "Internal worker id")
    ),
    request_body = UpdateWorker,
    responses(
        (status = 200, description = "Updated worker", body = Worker),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Worker not found", body = Object, example = json!({
            "detail": "Worker not found"
        }))
    ),
    tag = "Workers"
)]
pub async fn update_worker(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<UpdateWorker>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();
    let body = body.into_inner();

    let current = fetch_worker(pool.get_ref(), &id)
        .await?
        .ok_or_else(ApiError::worker_not_found)?;

    if let Some(code) = body.worker_id.as_deref() {
        if code.trim() != current.worker_id {
            debug!(id = %id, requested = code, "Ignoring worker code change");
        }
    }

    let mut assignments = Vec::new();
    if let Some(name) = body.name.as_deref() {
        assignments.push(("name", SqlValue::Text(validate_name(name)?)));
    }
    if let Some(rate) = body.daily_wage_rate {
        assignments.push(("daily_wage_rate", SqlValue::Real(validate_rate(rate)?)));
    }

    if let Some(update) = build_update_sql("workers", assignments, "id", &id) {
        execute_update(pool.get_ref(), update).await?;
    }

    let updated = fetch_worker(pool.get_ref(), &id)
        .await?
        .ok_or_else(ApiError::worker_not_found)?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete Worker
#[utoipa::path(
    delete,
    path = "/api/workers/{id}",
    params(
        ("id", Path, description = "Internal worker id")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Worker deleted successfully"
        })),
        (status = 404, description = "Worker not found", body = Object, example = json!({
            "detail": "Worker not found"
        }))
    ),
    tag = "Workers"
)]
pub async fn delete_worker(
    pool: web::Data<SqlitePool>,
    codes: web::Data<WorkerCodeIndex>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();

    let worker = fetch_worker(pool.get_ref(), &id)
        .await?
        .ok_or_else(ApiError::worker_not_found)?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM attendance WHERE worker_id = ?")
        .bind(&id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM workers WHERE id = ?")
        .bind(&id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::worker_not_found());
    }

    tx.commit().await?;
    codes.remove(&worker.worker_id).await;
    info!(id = %id, worker_id = %worker.worker_id, "Worker deleted");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Worker deleted successfully"
    })))
}
