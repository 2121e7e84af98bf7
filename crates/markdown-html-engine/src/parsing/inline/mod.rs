//! # Inline Parsing
//!
//! Turns a run of raw text into typed [`TextFragment`]s.
//!
//! ## Pipeline
//!
//! The input starts as one plain fragment and passes through five stages in
//! strict order:
//!
//! 1. `**` → bold
//! 2. `_` → italic
//! 3. `` ` `` → code
//! 4. `![alt](url)` → image
//! 5. `[text](url)` → link
//!
//! Each stage only re-splits fragments that are still plain. Nesting between
//! kinds is not attempted: `**a _b_**` is one bold fragment.
//!
//! ## Modules
//!
//! - **`types`**: `TextFragment` and `FragmentKind`
//! - **`kinds`**: delimiter constants and image/link patterns
//! - **`extract`**: `extract_markdown_images` / `extract_markdown_links`
//! - **`parser`**: `parse_inline()` and the per-stage split functions

pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use extract::{extract_markdown_images, extract_markdown_links};
pub use parser::parse_inline;
pub use types::{FragmentKind, TextFragment};
