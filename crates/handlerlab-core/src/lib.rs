//! handlerlab core: record model, seed parsing, and the shared error type.
//!
//! This crate defines the data contracts shared by the course store and the
//! hit counter. It carries no transport or runtime dependencies so the id
//! assignment rules can be tested without an HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LabError`/`Result` so a bad request
//! body never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod course;
pub mod error;

/// Shared result type.
pub use error::{LabError, Result};
pub use course::{Course, NewCourse};
