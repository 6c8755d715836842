use std::sync::Arc;

use portfolio_chat::config::ServerConfig;
use portfolio_chat::llm::{ChatService, ProviderConfig};
use portfolio_chat::routes::configure_routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_chat=info".into()),
        )
        .init();

    let server = ServerConfig::from_env();
    let service = Arc::new(ChatService::new(ProviderConfig::from_env()));
    if !service.is_configured() {
        tracing::warn!("API_KEY is not set; chat replies will report the missing key");
    }

    let routes = configure_routes(service);

    tracing::info!(
        "portfolio-chat v{} starting on http://{}",
        env!("CARGO_PKG_VERSION"),
        server.socket_addr()
    );
    warp::serve(routes).run(server.socket_addr()).await;
}
