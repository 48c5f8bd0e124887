//! Adopta notification server.
//!
//! Receives document-event webhooks for the adoption app and forwards push
//! notifications through FCM.

mod config;

use std::net::SocketAddr;

use axum::Router;
use color_eyre::eyre::WrapErr as _;
use tower_http::trace::TraceLayer;

use crate::config::Config;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("adopta-server starting");

    let config = Config::load().wrap_err("failed to load config")?;

    let access_token = config.access_token().ok_or_else(|| {
        color_eyre::eyre::eyre!("access token env var {} not set", config.auth.token_env)
    })?;

    // Record store
    let mut firestore = adopta_store::FirestoreClient::new(
        config.firestore.project_id.clone(),
        access_token.clone(),
    );
    if let Some(base_url) = &config.firestore.base_url {
        firestore = firestore.with_base_url(base_url.clone());
    }
    let users = adopta_store::FirestoreUserStore::new(firestore);

    // Push delivery
    let mut pusher =
        adopta_push::FcmPusher::new(config.fcm.project_id.clone(), access_token.clone());
    if let Some(base_url) = &config.fcm.base_url {
        pusher = pusher.with_base_url(base_url.clone());
    }
    let dispatcher = adopta_push::Dispatcher::new(pusher, adopta_store::NoopCleanup);

    // Notification service
    let service = adopta_service::Notifier::new(users, dispatcher);

    // Build router
    let app = Router::new()
        .merge(adopta_http::event_router(service))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config
        .server
        .listen
        .parse()
        .wrap_err("invalid listen address")?;
    tracing::info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err("failed to bind")?;

    axum::serve(listener, app).await.wrap_err("server error")?;

    Ok(())
}
