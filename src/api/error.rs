use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::model::{parse_id, Id};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid {0} ID. Must be an integer.")]
    InvalidId(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Not found")]
    NoRoute,

    /// Store failure; the cause is logged and never sent to the client
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::NoRoute => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            log::error!("{:#}", cause);
        }

        let status = self.status();
        (status, Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}

/// Validate a path identifier for `entity` ("product", "department").
pub fn require_id(raw: &str, entity: &'static str) -> Result<Id, ApiError> {
    parse_id(raw).ok_or(ApiError::InvalidId(entity))
}
