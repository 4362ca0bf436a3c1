//! Axum router wiring, one router per service.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{
    app_state::{CounterState, CourseState},
    handlers::{count, courses},
    ops,
};

pub fn build_course_router(state: CourseState) -> Router {
    Router::new()
        .route(
            "/courses",
            get(courses::list)
                .post(courses::create)
                .head(courses::method_not_allowed)
                .fallback(courses::method_not_allowed),
        )
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}

pub fn build_counter_router(state: CounterState) -> Router {
    Router::new()
        .route("/count", any(count::count))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
