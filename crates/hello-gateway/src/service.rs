//! Greeting gateway service - wires config, authenticators, routes and
//! middleware into a running HTTP server.

use crate::adapters::build_authenticator;
use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::{create_cors_layer, AuthLayer, TimeoutLayer, TracingLayer};
use crate::ports::Authenticator;
use crate::router::{build_router, route_table};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tracing::{error, info};

/// Greeting gateway, configured but not yet listening
pub struct GreetingGateway {
    config: Arc<GatewayConfig>,
    authenticator: Arc<dyn Authenticator>,
}

impl GreetingGateway {
    /// Validate `config` and build the authenticator chain.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let authenticator = build_authenticator(&config.auth)?;

        Ok(Self {
            config: Arc::new(config),
            authenticator,
        })
    }

    /// Build the fully layered router.
    ///
    /// Layer order, outermost first: tracing, timeout, CORS. Authentication is
    /// attached per route by [`build_router`].
    pub fn router(&self) -> Router {
        let auth = AuthLayer::new(Arc::clone(&self.authenticator));

        let middleware = ServiceBuilder::new()
            .layer(TracingLayer::new())
            .layer(TimeoutLayer::new(self.config.http.request_timeout))
            .layer(create_cors_layer(&self.config.cors));

        build_router(route_table(), auth).layer(middleware)
    }

    /// Bind the configured address and start serving.
    pub async fn start(self) -> Result<RunningGateway, GatewayError> {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))?;
        self.serve(listener)
    }

    /// Start serving on an already bound listener.
    pub fn serve(self, listener: TcpListener) -> Result<RunningGateway, GatewayError> {
        let local_addr = listener.local_addr()?;
        let router = self.router();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        info!(addr = %local_addr, "Starting hello gateway");

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    // A dropped sender also means shut down
                    let _ = shutdown_rx.await;
                })
                .await
                .map_err(GatewayError::from)
        });

        Ok(RunningGateway {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Handle to a gateway that is accepting connections
pub struct RunningGateway {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), GatewayError>>,
}

impl RunningGateway {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Trigger graceful shutdown and wait for in-flight requests to finish.
    pub async fn shutdown(self) -> Result<(), GatewayError> {
        stop(self.shutdown_tx, self.task).await
    }

    /// Serve until `signal` resolves, then shut down gracefully.
    ///
    /// Returns early if the server stops on its own.
    pub async fn run_until<F>(self, signal: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()>,
    {
        let RunningGateway {
            shutdown_tx,
            mut task,
            ..
        } = self;

        let stopped = tokio::select! {
            _ = signal => None,
            result = &mut task => Some(join(result)),
        };

        match stopped {
            Some(result) => {
                if let Err(e) = &result {
                    error!(error = %e, "HTTP server error");
                }
                result
            }
            None => {
                info!("Received shutdown signal");
                stop(shutdown_tx, task).await
            }
        }
    }
}

async fn stop(
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), GatewayError>>,
) -> Result<(), GatewayError> {
    // Err means the server already stopped
    let _ = shutdown_tx.send(());
    let result = join(task.await);
    info!("Hello gateway stopped");
    result
}

fn join(
    result: Result<Result<(), GatewayError>, tokio::task::JoinError>,
) -> Result<(), GatewayError> {
    match result {
        Ok(served) => served,
        Err(e) => Err(GatewayError::Serve(std::io::Error::other(e))),
    }
}
