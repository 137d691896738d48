//! Admission middleware
//!
//! Per-request orchestration: derive the client key, resolve the rule set,
//! run one atomic window update per rule in order, aggregate, and either
//! forward to the downstream handler or short-circuit with 429/500/503.
//! Quota headers are stamped on admitted and rejected responses alike; the
//! unavailability paths carry only `Retry-After`.
//!
//! The inner service is held in `Rc` so the downstream call happens only
//! after the admission decision; `EitherBody` lets a short-circuit response
//! and a downstream response share one body type.

use crate::core::limiter::AdmissionDecision;
use crate::server::middleware::helpers::{
    apply_quota_headers, client_key, normalize_application_id, quota_headers,
};
use crate::server::state::AppState;
use crate::utils::error::LimiterError;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpResponse};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Sliding-window admission middleware for Actix-web.
///
/// Mount it on a resource whose path carries an `applicationId` parameter;
/// scope-level mounting would run before the parameter is matched.
pub struct RateLimitMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for the admission middleware
pub struct RateLimitMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let state = match req.app_data::<web::Data<AppState>>().cloned() {
                Some(state) => state,
                None => {
                    warn!("Admission middleware mounted without application state");
                    let response = HttpResponse::InternalServerError().finish();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let application_id = normalize_application_id(req.match_info().get("applicationId"));
            let remote_addr = req
                .connection_info()
                .realip_remote_addr()
                .map(str::to_string)
                .unwrap_or_else(|| "unknown".to_string());
            let key = client_key(&remote_addr, &application_id);

            // One clock capture per request, reused for every rule.
            let now_ms = chrono::Utc::now().timestamp_millis();

            let rules = match state.resolver.resolve(&application_id).await {
                Ok(rules) => rules,
                Err(LimiterError::ConfigMissing) => {
                    warn!("No rule set for {} and no default record", application_id);
                    let response =
                        HttpResponse::InternalServerError().body("Rate limit config not found.");
                    return Ok(req.into_response(response).map_into_right_body());
                }
                Err(e) => {
                    warn!("Rule resolution failed for {}: {}", application_id, e);
                    return Ok(req.into_response(config_unavailable()).map_into_right_body());
                }
            };

            let mut snapshots = Vec::with_capacity(rules.len());
            for (index, rule) in rules.rules.iter().enumerate() {
                match state.accountant.evaluate(index, &key, rule, now_ms).await {
                    Ok(snapshot) => snapshots.push(snapshot),
                    Err(e) => {
                        warn!("Window accounting failed for {} rule {}: {}", key, index, e);
                        return Ok(req.into_response(backend_unavailable()).map_into_right_body());
                    }
                }
            }

            let decision = AdmissionDecision::aggregate(&rules, &snapshots, now_ms);
            debug!(
                "Admission for {}: blocked={} limit={} remaining={}",
                key, decision.blocked, decision.limit, decision.remaining
            );

            if decision.blocked {
                let mut builder = HttpResponse::TooManyRequests();
                for (name, value) in quota_headers(&decision) {
                    builder.insert_header((name, value));
                }
                let response = builder.body("Too Many Requests");
                return Ok(req.into_response(response).map_into_right_body());
            }

            let mut res = service.call(req).await?.map_into_left_body();
            apply_quota_headers(res.headers_mut(), &decision);
            Ok(res)
        })
    }
}

/// 503 for failures on the resolution path
fn config_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .insert_header(("Retry-After", "10"))
        .body("Service Unavailable: Rate limiter config error.")
}

/// 503 for failures on the accounting path
fn backend_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .insert_header(("Retry-After", "10"))
        .body("Service Unavailable: Rate limiter backend error.")
}
