// /api/v1/chat handlers

use crate::conversation::{Conversation, SUGGESTIONS};
use crate::llm::ChatService;
use crate::models::{ChatSessionResponse, ErrorResponse, RegenerateRequest, SendMessageRequest};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::info;
use warp::http::StatusCode;

pub async fn get_chat_handler(service: Arc<ChatService>) -> Result<impl warp::Reply, Infallible> {
    let configured = service.is_configured();
    let conversation = Conversation::new(configured);
    let response = ChatSessionResponse {
        provider: service.provider_name(),
        configured,
        suggestions: SUGGESTIONS.to_vec(),
        show_suggestions: conversation.show_suggestions(),
        messages: conversation.into_messages(),
    };

    Ok(warp::reply::json(&response))
}

pub async fn send_message_handler(
    service: Arc<ChatService>,
    request: SendMessageRequest,
) -> Result<impl warp::Reply, Infallible> {
    let SendMessageRequest { history, message } = request;
    info!(history = history.len(), "POST /api/v1/chat");

    let mut conversation = Conversation::from_messages(history);
    let reply = match conversation.send(&service, &message).await {
        Some(reply) => warp::reply::with_status(warp::reply::json(reply), StatusCode::OK),
        None => bad_request("Message must not be empty"),
    };

    Ok(reply)
}

pub async fn regenerate_handler(
    service: Arc<ChatService>,
    request: RegenerateRequest,
) -> Result<impl warp::Reply, Infallible> {
    info!(history = request.history.len(), "POST /api/v1/chat/regenerate");

    let mut conversation = Conversation::from_messages(request.history);
    let reply = match conversation.regenerate(&service).await {
        Some(reply) => warp::reply::with_status(warp::reply::json(reply), StatusCode::OK),
        None => bad_request("History has no user message to regenerate"),
    };

    Ok(reply)
}

fn bad_request(error: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            error: error.to_string(),
        }),
        StatusCode::BAD_REQUEST,
    )
}
