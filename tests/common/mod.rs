#![allow(dead_code)]

use actix_web::web::Data;
use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;

use wageflow::config::Config;
use wageflow::db::init_memory_db;
use wageflow::utils::worker_codes::WorkerCodeIndex;

/// Everything the app factory needs, backed by a fresh in-memory database.
pub struct TestState {
    pub pool: SqlitePool,
    pub config: Config,
    pub codes: Data<WorkerCodeIndex>,
}

pub async fn state() -> TestState {
    let pool = init_memory_db().await.unwrap();
    let config = Config::from_lookup(|key| match key {
        "RATE_API_PER_MIN" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();

    TestState {
        pool,
        config,
        codes: Data::new(WorkerCodeIndex::new()),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Naive local timestamp on today's date.
pub fn at(time: &str) -> String {
    format!("{}T{}:00", today().format("%Y-%m-%d"), time)
}

#[allow(unused_macros)]
macro_rules! test_app {
    ($state:expr) => {{
        let state = &$state;
        let config = state.config.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new(state.pool.clone()))
                .app_data(actix_web::web::Data::new(state.config.clone()))
                .app_data(state.codes.clone())
                .configure(move |cfg| wageflow::routes::configure(cfg, &config)),
        )
        .await
    }};
}
