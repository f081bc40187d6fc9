//! HTTP handlers for the assistant endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::chat::ChatMessage;
use crate::ports::ChatTurn;

use super::dto::{ChatMessageResponse, SendMessageRequest, SendMessageResponse};

/// GET /api/assistant/messages - full transcript, oldest first.
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<ChatMessageResponse>> {
    let transcript = state.transcript.lock().await;
    Json(
        transcript
            .messages()
            .iter()
            .map(ChatMessageResponse::from)
            .collect(),
    )
}

/// POST /api/assistant/messages - send one message.
///
/// The transcript lock is held across the provider call, so sends are
/// answered strictly one at a time and the history each send carries is
/// always complete.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text must not be blank".to_string()));
    }

    let mut transcript = state.transcript.lock().await;

    let history: Vec<ChatTurn> = transcript
        .messages()
        .iter()
        .map(|m| ChatTurn::new(m.role(), m.text()))
        .collect();

    let user_message = ChatMessage::user(text);
    let reply_text = state.gateway.converse(&history, text).await;
    let model_message = ChatMessage::model(reply_text);

    let response = SendMessageResponse {
        user: ChatMessageResponse::from(&user_message),
        model: ChatMessageResponse::from(&model_message),
    };

    transcript.push(user_message);
    transcript.push(model_message);

    Ok((StatusCode::CREATED, Json(response)))
}
