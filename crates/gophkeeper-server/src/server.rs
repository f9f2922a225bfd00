//! The `RpcServer` (C11, `spec.md` §4.8/§5): builds the `axum::Router`,
//! wires the auth interceptor and tracing middleware, and serves with
//! graceful shutdown so in-flight requests complete before the listener
//! closes.

use std::net::SocketAddr;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::auth::require_bearer_token;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handlers;
use crate::state::AppState;

/// The GophKeeper HTTP server.
pub struct Server {
    addr: SocketAddr,
    app: Router,
}

impl Server {
    /// Builds the server: opens the database, applies migrations, and wires
    /// the routing table and middleware stack. Does not bind a socket yet.
    pub fn new(config: &ServerConfig) -> ServerResult<Self> {
        let state = AppState::new(config)?;
        let app = Self::build_app(state);
        Ok(Self {
            addr: config.bind_addr,
            app,
        })
    }

    fn build_app(state: AppState) -> Router {
        // Bearer middleware is layered on `secret_routes` alone, never on
        // `auth_routes`. Secret names travel in the URL path
        // (`/secrets/:name`) and are arbitrary owner-chosen strings, so a
        // suffix- or path-based public allowlist applied across both trees
        // could collide with a secret named e.g. `login`. Scoping the layer
        // to the subtree that never contains user-chosen path segments in
        // its public members sidesteps the collision entirely.
        let secret_routes = Router::new()
            .route(
                "/",
                get(handlers::secrets::list_secrets).post(handlers::secrets::create_secret),
            )
            .route(
                "/:name",
                get(handlers::secrets::get_secret)
                    .put(handlers::secrets::update_secret)
                    .delete(handlers::secrets::delete_secret),
            )
            .route_layer(from_fn_with_state(state.clone(), require_bearer_token));

        let auth_routes = Router::new()
            .route("/register", post(handlers::auth::register))
            .route("/login", post(handlers::auth::login))
            .route("/verify", post(handlers::auth::verify));

        let api_routes = Router::new()
            .nest("/auth", auth_routes)
            .nest("/secrets", secret_routes);

        Router::new()
            .route("/healthz", get(handlers::health::healthz))
            .nest("/api/v1", api_routes)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Binds the configured address and serves until a shutdown signal
    /// arrives, then waits for in-flight requests to complete (`spec.md`
    /// §5's graceful-shutdown requirement).
    pub async fn run(self) -> ServerResult<()> {
        info!(addr = %self.addr, "starting gophkeeper-server");
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))?;

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))
    }

    /// The address this server will bind to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Exposes the built router directly, for in-process `tower::ServiceExt::oneshot`
    /// testing without binding a real socket.
    pub fn into_router(self) -> Router {
        self.app
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    info!("shutdown signal received, draining in-flight requests");
}
