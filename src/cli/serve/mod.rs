//! Serve command - runs the web server

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::i18n::Translator;
use crate::infrastructure::logging;
use crate::web::{self, AppState, PageRenderer};

/// Run the web server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let mode = config.app.env.render_mode();
    let translator = Arc::new(Translator::from_embedded(&config.app.locale, mode)?);
    let renderer = Arc::new(PageRenderer::new(mode, translator)?);

    let state = AppState {
        renderer,
        settings: config.app.clone(),
    };
    let app = web::create_router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
