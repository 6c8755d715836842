// Route definitions

use crate::handlers;
use crate::llm::ChatService;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

/// Largest accepted chat request body
const MAX_BODY_BYTES: u64 = 256 * 1024;

pub fn configure_routes(
    service: Arc<ChatService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api").and(warp::path("v1"));

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "ok");

    // GET /api/v1/portfolio
    let get_portfolio = api
        .and(warp::path("portfolio"))
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::get_portfolio_handler);

    // GET /api/v1/chat
    let get_chat = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_service(service.clone()))
        .and_then(handlers::get_chat_handler);

    // POST /api/v1/chat
    let post_message = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_service(service.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::send_message_handler);

    // POST /api/v1/chat/regenerate
    let regenerate = api
        .and(warp::path("chat"))
        .and(warp::path("regenerate"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_service(service))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::regenerate_handler);

    // Combine routes
    health
        .or(get_portfolio)
        .or(get_chat)
        .or(post_message)
        .or(regenerate)
}

fn with_service(
    service: Arc<ChatService>,
) -> impl Filter<Extract = (Arc<ChatService>,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}
