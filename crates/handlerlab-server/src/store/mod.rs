//! Shared mutable state behind the two services.

pub mod course_store;
pub mod hit_counter;

pub use course_store::{CourseStore, InMemoryCourseStore};
pub use hit_counter::HitCounter;
