//! # HTML Tree
//!
//! The output model: a closed [`HtmlNode`] enum of leaves and branches with
//! insertion-ordered [`Attributes`], serialized by [`HtmlNode::render`].
//!
//! `convert` maps inline [`TextFragment`](crate::parsing::inline::TextFragment)s
//! to leaf nodes.

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use convert::fragments_to_nodes;
pub use node::HtmlNode;
