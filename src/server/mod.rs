//! HTTP server implementation

pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

use crate::config::Config;
use crate::utils::error::Result;
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;

/// Build state, bind, and run the HTTP server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    let bind_addr = config.server.bind_addr();
    let workers = config.server.workers;

    let state = AppState::new(config).await?;
    let store = state.store.clone();

    info!("Listening on {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(routes::configure_routes)
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.bind(&bind_addr)?.run().await?;

    store.close().await?;
    Ok(())
}
