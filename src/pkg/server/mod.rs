pub mod csrf;
pub mod handlers;
pub mod middlewares;
pub mod router;
pub mod state;
pub mod uispec;

use axum::{extract::Request, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::{conf::settings, prelude::Result};
use router::build_routes;

pub async fn listen() -> Result<()> {
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.listen_port.clone())).await?;
    tracing::info!(
        "{} listening at port {}",
        settings.service_name,
        settings.listen_port
    );
    // accept the slash-terminated spellings of every path as well
    let app = NormalizePathLayer::trim_trailing_slash().layer(build_routes().await?);
    tokio::select! {
        r = axum::serve(listener, ServiceExt::<Request>::into_make_service(app)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
