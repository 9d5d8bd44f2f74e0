use crate::{
    api::{attendance, dashboard, report, site, worker},
    config::Config,
    error::ApiError,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Per peer IP limiter, 0 requests per minute turns it off
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("period and burst size are non-zero");
        Governor::new(&cfg)
    }

    let api_limiter = Condition::new(
        config.rate_api_per_min > 0,
        build_limiter(config.rate_api_per_min),
    );

    // Malformed bodies and path segments answer with the same {"detail": ...} shape as every other error
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    );

    // Public site fragments
    cfg.service(site::navbar).service(site::footer);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter)
            .service(web::resource("").route(web::get().to(site::index)))
            .service(
                web::scope("/workers")
                    // /workers
                    .service(
                        web::resource("")
                            .route(web::get().to(worker::list_workers))
                            .route(web::post().to(worker::create_worker)),
                    )
                    // /workers/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(worker::get_worker))
                            .route(web::put().to(worker::update_worker))
                            .route(web::delete().to(worker::delete_worker)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
                    // /attendance/today
                    .service(
                        web::resource("/today").route(web::get().to(attendance::today_attendance)),
                    )
                    // /attendance/date/{date}
                    .service(
                        web::resource("/date/{date}")
                            .route(web::get().to(attendance::attendance_by_date)),
                    )
                    // /attendance/worker/{id}
                    .service(
                        web::resource("/worker/{id}")
                            .route(web::get().to(attendance::worker_attendance)),
                    )
                    // /attendance/monthly/{year}/{month}
                    .service(
                        web::resource("/monthly/{year}/{month}")
                            .route(web::get().to(report::monthly_report)),
                    )
                    // /attendance/monthly/{year}/{month}/export
                    .service(
                        web::resource("/monthly/{year}/{month}/export")
                            .route(web::get().to(report::export_monthly_report)),
                    ),
            )
            .service(
                web::scope("/dashboard")
                    // /dashboard/stats
                    .service(
                        web::resource("/stats").route(web::get().to(dashboard::dashboard_stats)),
                    ),
            ),
    );
}
