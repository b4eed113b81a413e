use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower::BoxError;

/// Errors answered directly to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    NotFound,
    Timeout,
    Overloaded,
    Internal(String),
}

impl ResponseError {
    pub fn status(&self) -> StatusCode {
        match self {
            ResponseError::NotFound => StatusCode::NOT_FOUND,
            ResponseError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ResponseError::Overloaded => StatusCode::SERVICE_UNAVAILABLE,
            ResponseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn reason(&self) -> String {
        match self {
            ResponseError::NotFound => String::from("not found"),
            ResponseError::Timeout => String::from("request timed out"),
            ResponseError::Overloaded => String::from("service overloaded"),
            ResponseError::Internal(reason) => reason.clone(),
        }
    }
}

impl From<BoxError> for ResponseError {
    fn from(error: BoxError) -> Self {
        if error.is::<tower::timeout::error::Elapsed>() {
            ResponseError::Timeout
        } else if error.is::<tower::load_shed::error::Overloaded>() {
            ResponseError::Overloaded
        } else {
            ResponseError::Internal(error.to_string())
        }
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.reason() }))).into_response()
    }
}

/// Errors that stop the server from starting or running
#[derive(Debug)]
pub enum ServerError {
    Io(std::io::Error),
    Dotenv(dotenvy::Error),
}

impl From<std::io::Error> for ServerError {
    fn from(error: std::io::Error) -> Self {
        ServerError::Io(error)
    }
}

impl From<dotenvy::Error> for ServerError {
    fn from(error: dotenvy::Error) -> Self {
        ServerError::Dotenv(error)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Io(error) => write!(f, "io: {error}"),
            ServerError::Dotenv(error) => write!(f, "could not load .env: {error}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Io(error) => Some(error),
            ServerError::Dotenv(error) => Some(error),
        }
    }
}
