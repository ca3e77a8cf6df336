//! Chat page HTML embedding.
//!
//! The Parley chat page is a single self-contained HTML file with all CSS
//! and JavaScript inlined: the conversation transcript, a message input,
//! four quick-action buttons, and a side panel with a history lookup and
//! three analytics counters.
//!
//! The HTML is embedded at compile time via `include_str!` so the binary
//! has no external file dependencies at runtime.

/// The complete self-contained chat page HTML.
///
/// Served from the `/ui` HTTP endpoint:
///
/// ```rust,ignore
/// use parley_ui::CHAT_PAGE_HTML;
///
/// async fn ui_handler() -> axum::response::Html<&'static str> {
///     axum::response::Html(CHAT_PAGE_HTML)
/// }
/// ```
pub const CHAT_PAGE_HTML: &str = include_str!("../assets/chat.html");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_page_is_not_empty() {
        assert!(!CHAT_PAGE_HTML.is_empty());
    }

    #[test]
    fn chat_page_is_valid_html() {
        assert!(CHAT_PAGE_HTML.starts_with("<!DOCTYPE html>"));
        assert!(CHAT_PAGE_HTML.contains("<html"));
        assert!(CHAT_PAGE_HTML.contains("</html>"));
    }

    #[test]
    fn chat_page_has_embedded_css_and_js() {
        assert!(CHAT_PAGE_HTML.contains("<style>"));
        assert!(CHAT_PAGE_HTML.contains("<script>"));
    }

    #[test]
    fn chat_page_has_no_external_urls() {
        assert!(!CHAT_PAGE_HTML.contains("https://cdn"));
        assert!(!CHAT_PAGE_HTML.contains("https://unpkg"));
        assert!(!CHAT_PAGE_HTML.contains("https://fonts.googleapis"));
    }

    #[test]
    fn chat_page_references_api_endpoints() {
        assert!(CHAT_PAGE_HTML.contains("/chat"));
        assert!(CHAT_PAGE_HTML.contains("/history"));
        assert!(CHAT_PAGE_HTML.contains("/analytics"));
    }

    #[test]
    fn chat_page_has_four_quick_actions() {
        assert_eq!(CHAT_PAGE_HTML.matches("class=\"quick\"").count(), 4);
        assert!(CHAT_PAGE_HTML.contains("Who is Elon Musk"));
        assert!(CHAT_PAGE_HTML.contains("What is artificial intelligence"));
        assert!(CHAT_PAGE_HTML.contains("Latest technology news"));
        assert!(CHAT_PAGE_HTML.contains("show my history"));
    }

    #[test]
    fn chat_page_has_analytics_counters() {
        assert!(CHAT_PAGE_HTML.contains("id=\"m-total\""));
        assert!(CHAT_PAGE_HTML.contains("id=\"m-users\""));
        assert!(CHAT_PAGE_HTML.contains("id=\"m-today\""));
    }

    #[test]
    fn chat_page_history_lookup_uses_limit_five() {
        assert!(CHAT_PAGE_HTML.contains("limit=5"));
    }
}
