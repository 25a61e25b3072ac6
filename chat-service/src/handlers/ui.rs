use axum::response::Html;

/// Serve the chat interface page.
pub async fn chat_interface() -> Html<&'static str> {
    Html(include_str!("../../static/chat.html"))
}
