//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Delimited`**: `**` bold, `_` italic, `` ` `` code, split in that order
//! - **`Image`**: `![alt](destination)`
//! - **`Link`**: `[text](destination)`, never preceded by `!`
//!
//! The parser calls these constants; it never hardcodes `**` or `](`.

pub mod delimited;
pub mod image;
pub mod link;

pub use delimited::Delimited;
pub use image::Image;
pub use link::Link;
