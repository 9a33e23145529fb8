use super::{ApiResult, AppState};
use crate::input::FormInput;
use crate::page::Page;
use axum::{Form, extract::State, response::Html};
use std::sync::Arc;

/// Initial render: banners, title, and the empty form.
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    render_page(&state, FormInput::default()).await
}

/// Form submission: run the flow once.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(input): Form<FormInput>,
) -> ApiResult<Html<String>> {
    render_page(&state, input).await
}

pub async fn healthz() -> &'static str {
    "ok"
}

async fn render_page(state: &AppState, input: FormInput) -> ApiResult<Html<String>> {
    let mut page = Page::new();
    let outcome = state.flow.run(&input, &mut page).await;

    let sidebar = page.sidebar_mut();
    sidebar.stock1 = input.stock1;
    sidebar.stock2 = input.stock2;
    sidebar.show_api_key_field = outcome.credential_prompt;

    Ok(Html(state.renderer.render(&page)?))
}
