//! `/count`: stateful hit counter.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::app_state::CounterState;
use crate::http_error::HttpError;

pub fn count_message(n: u64) -> String {
    format!("This endpoint was called {n} times\n")
}

pub async fn count(State(state): State<CounterState>) -> Result<impl IntoResponse, HttpError> {
    let n = state.counter().hit().await?;
    tracing::debug!(count = n, "count endpoint hit");

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        count_message(n),
    ))
}
