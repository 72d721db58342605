use axum::response::Html;
use tracing::instrument;

/// Document shell for both the page and the chart frame. The wasm router
/// decides which one to mount from the location path.
const INDEX_HTML: &str = include_str!("index.html");

#[instrument]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
