//! handlerlab server library entry.
//!
//! This crate wires the injected state, HTTP handlers, config and error
//! mapping into two routers: the course store and the hit counter. It is
//! consumed by the two binaries (`src/bin/`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod http_error;
pub mod ops;
pub mod router;
pub mod runtime;
pub mod store;
