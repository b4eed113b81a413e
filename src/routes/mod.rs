use axum::{Router, routing::get};

use crate::errors::ResponseError;

pub mod message;

pub fn router() -> Router {
    Router::new()
        .route("/api/message", get(message::get_message))
        .fallback(not_found)
}

async fn not_found() -> ResponseError {
    ResponseError::NotFound
}
