use std::future::Future;
use std::sync::Arc;

use axum::Router;
use common::utils::shutdown::shutdown_signal;
use configs::ServerConfig;
use service::{MemoryStore, Record};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, SharedStore};

/// Router over a freshly seeded store for `R`.
pub fn build_app<R: Record>() -> Router {
    let store: SharedStore<R> = Arc::new(MemoryStore::<R>::seeded());
    routes::build_router::<R>(store)
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: seed the store, bind the configured address and serve until Ctrl+C.
pub async fn run<R: Record>(service: &'static str, cfg: &ServerConfig) -> Result<(), StartupError> {
    let app = build_app::<R>();

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(
        service,
        event = "listening",
        %addr,
        resource = R::RESOURCE,
        "{} Service starting on port {}",
        R::ENTITY,
        cfg.port
    );

    serve(listener, app, shutdown_signal(service)).await
}
