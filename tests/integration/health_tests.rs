//! Health endpoint tests

#[cfg(test)]
mod tests {
    use crate::common::test_state;
    use actix_web::{test, web, App};
    use rategate::server::routes;

    #[actix_web::test]
    async fn test_health_check() {
        crate::skip_without_env!("REDIS_URL");

        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(routes::configure_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_detailed_health_check_reports_store() {
        crate::skip_without_env!("REDIS_URL");

        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(routes::configure_routes),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/detailed").to_request(),
        )
        .await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["store"], true);
        assert_eq!(body["data"]["status"], "healthy");
    }
}
