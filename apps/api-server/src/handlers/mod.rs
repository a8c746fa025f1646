//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Malformed requests are reported like any other unexpected failure
        .app_data(web::PathConfig::default().error_handler(|e, _| AppError::extraction(e)))
        .app_data(web::QueryConfig::default().error_handler(|e, _| AppError::extraction(e)))
        .app_data(web::JsonConfig::default().error_handler(|e, _| AppError::extraction(e)))
        .app_data(web::FormConfig::default().error_handler(|e, _| AppError::extraction(e)))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource("/posts")
                        .route(web::get().to(posts::list))
                        .route(web::post().to(posts::create))
                        .default_service(web::to(route_not_found)),
                )
                .service(
                    web::resource("/posts/{id}")
                        .route(web::get().to(posts::show))
                        .route(web::put().to(posts::update))
                        .route(web::patch().to(posts::update))
                        .route(web::delete().to(posts::delete))
                        .default_service(web::to(route_not_found)),
                )
                .default_service(web::to(route_not_found)),
        )
        .default_service(web::to(route_not_found));
}

/// Unknown paths and unsupported methods go through the 500 mapping.
async fn route_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::Internal(format!(
        "No route found for \"{} {}\"",
        req.method(),
        req.path()
    )))
}
