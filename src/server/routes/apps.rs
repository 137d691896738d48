//! Application endpoint behind the admission middleware

use crate::server::middleware::RateLimitMiddleware;
use crate::server::routes::ApiResponse;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;

/// Configure the rate-limited application route.
///
/// The middleware wraps the resource, not the scope, so the
/// `applicationId` parameter is already matched when it runs.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test/{applicationId}")
            .wrap(RateLimitMiddleware)
            .route(web::get().to(application_request)),
    );
}

/// Downstream handler for admitted requests
pub async fn application_request(path: web::Path<String>) -> ActixResult<HttpResponse> {
    let application_id = path.into_inner();
    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({
        "application": application_id,
        "status": "ok",
    }))))
}
