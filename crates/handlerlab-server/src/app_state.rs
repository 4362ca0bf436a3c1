//! Shared application state for the two services.
//!
//! Each service gets its own state type; state is built once in `main` and
//! injected into the router, never held in a global.

use std::sync::Arc;

use handlerlab_core::error::Result;

use crate::store::{CourseStore, HitCounter, InMemoryCourseStore};

#[derive(Clone)]
pub struct CourseState {
    store: Arc<dyn CourseStore>,
}

impl CourseState {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// In-memory store seeded from a JSON document.
    /// Returns Result so main can report a bad seed and exit.
    pub fn from_seed(seed: &str) -> Result<Self> {
        let store = InMemoryCourseStore::from_seed_str(seed)?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn store(&self) -> Arc<dyn CourseStore> {
        Arc::clone(&self.store)
    }
}

#[derive(Clone, Default)]
pub struct CounterState {
    counter: Arc<HitCounter>,
}

impl CounterState {
    pub fn new(counter: Arc<HitCounter>) -> Self {
        Self { counter }
    }

    pub fn counter(&self) -> Arc<HitCounter> {
        Arc::clone(&self.counter)
    }
}
