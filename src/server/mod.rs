mod extract;
pub mod handlers;
pub mod page;
mod types;

pub use extract::Components;
pub use handlers::AppState;
pub use types::GenerateForm;

use crate::{
    Result,
    config::Config,
    generator::Generator,
    llm::OpenAiClient,
};
use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/generate", post(handlers::generate))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = Arc::new(OpenAiClient::new(&config.llm));
    let generator = Generator::new(llm_client, config.llm.model.clone());

    let app = router(AppState::new(generator));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} (model: {})", addr, config.llm.model);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
