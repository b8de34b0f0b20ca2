//! Uniform response envelope shared by every handler.
//!
//! Bodies look like `{"message": ..., "status": 200, "data": ...}` where
//! `message` and `data` are omitted when absent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// A status code paired with its envelope.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: Envelope<T>,
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> StatusCode { self.status }

    pub fn body(&self) -> &Envelope<T> { &self.body }
}

/// Build the response for `status`, keeping only the parts that are present.
pub fn generate_response<T: Serialize>(message: Option<String>, status: StatusCode, data: Option<T>) -> ApiResponse<T> {
    ApiResponse {
        status,
        body: Envelope { message, status: status.as_u16(), data },
    }
}

/// Shorthand for responses that carry a message and no payload.
pub fn message_only(message: impl Into<String>, status: StatusCode) -> ApiResponse<()> {
    generate_response(Some(message.into()), status, None)
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // 204 must not carry a body
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        (self.status, Json(self.body)).into_response()
    }
}
