//! Server Implementation
//!
//! HTTP 服务器启动和管理

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let shutdown = CancellationToken::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            trigger.cancel();
        });

        self.run_until(shutdown).await
    }

    /// Serve until `shutdown` is cancelled
    ///
    /// Open connections (e.g. live feeds) get `shutdown_timeout` to finish,
    /// after which the server returns anyway.
    pub async fn run_until(&self, shutdown: CancellationToken) -> Result<()> {
        let app = crate::api::build_app(self.state.clone());

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Employee server listening on {}", listener.local_addr()?);

        let graceful =
            axum::serve(listener, app).with_graceful_shutdown(shutdown.clone().cancelled_owned());

        let grace_period = self.config.shutdown_timeout();
        let deadline = async {
            shutdown.cancelled().await;
            tokio::time::sleep(grace_period).await;
        };

        tokio::select! {
            result = graceful => result?,
            _ = deadline => {
                tracing::warn!(
                    timeout_ms = grace_period.as_millis() as u64,
                    "Graceful shutdown timed out, dropping open connections"
                );
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
