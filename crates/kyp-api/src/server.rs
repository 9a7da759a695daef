//! API server implementation.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{AppState, Error, Result, router};

/// KYP API server.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind `address` and prepare the router.
    pub async fn bind(address: &str, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(address)
            .await
            .map_err(|e| Error::bind(address, e))?;
        Ok(Self {
            listener,
            router: router(state),
        })
    }

    /// Address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until SIGINT or SIGTERM.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.local_addr()?;
        info!(%address, "KYP API listening");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        info!("KYP API stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or on SIGTERM where supported.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}
