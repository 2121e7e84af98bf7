//! # markdown-html-engine
//!
//! Converts a markdown document into an HTML node tree and renders it.
//!
//! ```text
//! markdown → blocks → block types → block builders → inline fragments → leaves → div tree → HTML
//! ```
//!
//! ```
//! use markdown_html_engine::render_document_to_html;
//!
//! let html = render_document_to_html("# Hi\n\nSome **bold** text.").unwrap();
//! assert_eq!(html, "<div><h1>Hi</h1><p>Some <b>bold</b> text.</p></div>");
//! ```
//!
//! Only a small subset of markdown is recognised: bold, italic, code, links
//! and images inline; paragraphs, headings, fenced code, quotes and flat
//! lists as blocks.

pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{MarkdownError, Result};
pub use html::{Attributes, HtmlNode};
pub use parsing::{
    blocks::{BlockType, block_to_node, classify_block, split_into_blocks},
    inline::{FragmentKind, TextFragment, extract_markdown_images, extract_markdown_links, parse_inline},
    markdown_to_document, render_document_to_html,
};
