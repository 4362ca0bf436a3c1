//! HTTP handlers.

pub mod count;
pub mod courses;
