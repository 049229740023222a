// Compiled-in HTML pages for the hub and the summarizer interface
// Author: kelexine (https://github.com/kelexine)

use axum::response::Html;

const HUB_PAGE: &str = include_str!("../../assets/hub.html");
const SUMMARIZER_PAGE: &str = include_str!("../../assets/summarizer.html");

/// `GET /` - the hub landing page
pub async fn hub_page() -> Html<&'static str> {
    Html(HUB_PAGE)
}

/// `GET /wikisummarizer` - the summarizer interface
pub async fn summarizer_page() -> Html<&'static str> {
    Html(SUMMARIZER_PAGE)
}
