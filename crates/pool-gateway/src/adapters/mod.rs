//! Gateway adapters.

pub mod html;

pub use html::BasicHtmlRenderer;
