//! Parley UI crate - embedded chat page HTML.
//!
//! A single self-contained HTML file with all CSS and JavaScript inline,
//! embedded at compile time via `include_str!`. No external dependencies
//! or build steps are required.

pub mod chat_page;

pub use chat_page::CHAT_PAGE_HTML;
