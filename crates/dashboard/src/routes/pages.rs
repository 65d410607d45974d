//! Embedded Dashboard Page

use axum::response::Html;

/// Serve the single-page dashboard (Home / Single Prediction / Batch)
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../page/index.html"))
}
