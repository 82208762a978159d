use std::sync::Arc;
use std::time::Duration;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tokio_util::sync::CancellationToken;

use persistence::session_storage::purge::StaleSessionPurge;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);
const PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let shutdown = container.shutdown.clone();

        if let Some(purge) = container.session_purge.clone() {
            tokio::spawn(purge_stale_sessions(
                purge,
                config.storage.session_ttl,
                shutdown.clone(),
            ));
        }

        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.session_api,
                container.restaurant_api,
                container.cart_api,
                container.checkout_api,
            ),
            "Food Order API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);

        let on_signal = shutdown.clone();
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async move {
                    shutdown_signal().await;
                    on_signal.cancel();
                },
                Some(SHUTDOWN_GRACE),
            )
            .await?;

        shutdown.cancel();
        Ok(())
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Could not listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Could not listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling pending checkouts");
}

/// Deletes carts of sessions idle for longer than `ttl`, once per interval,
/// until `shutdown` is cancelled.
async fn purge_stale_sessions(
    purge: Arc<dyn StaleSessionPurge>,
    ttl: chrono::Duration,
    shutdown: CancellationToken,
) {
    let mut interval = tokio::time::interval(PURGE_INTERVAL);
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            _ = interval.tick() => {
                match purge.delete_stale(ttl).await {
                    Ok(0) => {}
                    Ok(count) => tracing::info!("Purged {count} idle session storage entries"),
                    Err(e) => tracing::warn!("Session purge failed: {e}"),
                }
            }
        }
    }
}
