//! GophKeeper HTTP server: `AuthService` and `SecretService` (C8, C9), the
//! bearer-token interceptor (C10), and the `axum` application lifecycle
//! (C11).

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::Server;
pub use state::AppState;
