//! `/courses`: list and create.

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Serialize;

use handlerlab_core::course::NewCourse;
use handlerlab_core::error::LabError;

use crate::app_state::CourseState;
use crate::http_error::HttpError;

const ALLOWED_METHODS: &str = "GET, POST";

fn json_body<T: Serialize>(value: &T) -> Result<Vec<u8>, HttpError> {
    serde_json::to_vec(value)
        .map_err(|e| HttpError(LabError::Internal(format!("marshal courses failed: {e}"))))
}

pub async fn list(State(state): State<CourseState>) -> Result<Response, HttpError> {
    let courses = state.store().list().await;
    let body = json_body(&courses)?;
    tracing::debug!(count = courses.len(), "courses listed");

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn create(
    State(state): State<CourseState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, HttpError> {
    let body = body.map_err(|e| {
        tracing::debug!(error = %e, "request body read failed");
        LabError::BadRequest("cannot read request body".into())
    })?;

    let new = NewCourse::from_slice(&body)?;
    let created = state.store().create(new).await?;
    tracing::info!(id = created.id, name = %created.name, "course created");

    let body = json_body(&created)?;
    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Any method other than GET/POST.
pub async fn method_not_allowed() -> Response {
    (
        [(header::ALLOW, ALLOWED_METHODS)],
        HttpError(LabError::MethodNotAllowed),
    )
        .into_response()
}
