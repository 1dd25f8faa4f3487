//! HTTP boundary for daymemory
//!
//! Assembles the router and owns the error translation layer: every
//! failure a handler surfaces leaves this crate as one of the two fixed
//! JSON error shapes, never as a framework default page.

mod error;
mod extract;
mod health;

use std::net::SocketAddr;

use axum::Router;
use daymemory_config::Config;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use extract::ValidatedJson;

/// Assembled server with routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        Self {
            router: app,
            listen_address,
        }
    }

    /// Merge application routes into the server.
    ///
    /// Handlers are expected to surface failures as [`ApiError`] so every
    /// response leaves through the same translation boundary.
    #[must_use]
    pub fn merge(mut self, routes: Router) -> Self {
        self.router = self.router.merge(routes);
        self
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the assembled router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router.layer(TraceLayer::new_for_http())
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
