use super::{extract::Components, page};
use crate::generator::Generator;
use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
}

impl AppState {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

pub async fn index() -> Html<String> {
    Html(page::render(""))
}

/// Full-page form submission: the result is written into the page.
pub async fn submit(
    State(state): State<AppState>,
    Components(components): Components,
) -> Html<String> {
    debug!("Page submission with components: {:?}", components);

    let output = state.generator.generate_text(&components).await;
    Html(page::render(&output))
}

/// Script-driven submission: the result is the whole plain-text body.
pub async fn generate(
    State(state): State<AppState>,
    Components(components): Components,
) -> String {
    debug!("Async generation with components: {:?}", components);

    state.generator.generate_text(&components).await
}
