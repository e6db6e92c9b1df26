//! Pulse Web Node
//!
//! The HTTP application around the `pulse-core` survey domain: per-visitor
//! sessions, completion flags, route handlers, and HTML rendering.
//!
//! # Architecture
//!
//! - **Session**: in-memory response store addressed by a random token in a
//!   transient cookie; also carries one-shot flash notices
//! - **Flags**: per-survey completion markers in long-lived cookies,
//!   decoupled from the session's lifetime
//! - **Routes**: the six-route survey flow, gated by the core progression
//!   state machine
//! - **Pages**: HTML generation with explicit escaping, no template engine
//! - **Server**: env-var config, shared state, bind + graceful shutdown
//!
//! # Example
//!
//! ```no_run
//! use pulse_web::{serve, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     serve(ServerConfig::from_env()).await
//! }
//! ```

pub mod error;
pub mod flags;
pub mod pages;
pub mod routes;
pub mod server;
pub mod session;

pub use error::{Error, Result};
pub use flags::CompletionFlags;
pub use routes::build_router;
pub use server::{serve, AppState, ServerConfig};
pub use session::SessionStore;
