//! kaiwa-server: HTTP front end for the conversation relay.
//!
//! Serves the landing page, accepts one chat turn per `POST /chat`, and
//! keeps each browser session's transcript in memory, keyed by a cookie.

pub mod assets;
pub mod cookie;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
