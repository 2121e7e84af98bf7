//! # Block Parsing
//!
//! Three steps turn a document into block subtrees:
//!
//! 1. **Splitting** (`split`): blank lines cut the document into trimmed blocks
//! 2. **Classification** (`classify`): each block gets one [`BlockType`] from
//!    line-prefix tests alone
//! 3. **Building** (`builder`): a per-type builder turns the block into one
//!    branch node, inline-parsing any literal text
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific types owning their delimiters (heading
//!   markers, fences, quote prefix, list markers)
//! - **`split`**: `split_into_blocks`
//! - **`classify`**: `classify_block`
//! - **`builder`**: `block_to_node` and the per-type builders
//!
//! ## Key Invariants
//!
//! - No returned block is empty
//! - Classification never fails; unmatched blocks are paragraphs
//! - Fenced code is a raw zone: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::{block_to_node, build_block};
pub use classify::classify_block;
pub use split::split_into_blocks;
pub use types::BlockType;
