//! Generator page

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - Test case generator page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
