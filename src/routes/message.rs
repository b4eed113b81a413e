use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MESSAGE: &str = "Hello from the backend!";

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl Default for MessageResponse {
    fn default() -> Self {
        MessageResponse {
            message: String::from(MESSAGE),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/message",
    responses(
        (status = 200, description = "Greeting from the backend", body = MessageResponse)
    )
)]
pub async fn get_message() -> (StatusCode, Json<MessageResponse>) {
    log::debug!("fn: message::get_message");

    (StatusCode::OK, Json(MessageResponse::default()))
}
