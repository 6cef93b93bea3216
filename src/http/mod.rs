//! HTTP server module.
//!
//! Binds the router to a plain HTTP listener and drains in-flight requests on
//! SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
