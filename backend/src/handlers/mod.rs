use actix_web::{error::InternalError, web, HttpResponse};
use shared::ApiError;

pub mod gallery;
pub mod render;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(web::scope("/api").configure(render::configure));
}

/// Answer malformed JSON bodies with an `ApiError` instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::debug!("Rejected request body: {}", message);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiError {
                error: "invalid_request".to_string(),
                message,
            }),
        )
        .into()
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
