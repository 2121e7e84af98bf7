pub mod blocks;
pub mod inline;

#[cfg(test)]
pub mod tests;

use log::debug;

use crate::{error::Result, html::HtmlNode};

use blocks::{block_to_node, split_into_blocks};

/// Converts a whole markdown document into a tree rooted at a `div`.
///
/// The conversion is all-or-nothing: the first block that fails to build
/// aborts it.
pub fn markdown_to_document(markdown: &str) -> Result<HtmlNode> {
    let blocks = split_into_blocks(markdown);
    debug!("document split into {} block(s)", blocks.len());

    let children = blocks
        .iter()
        .map(|block| block_to_node(block))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| debug!("document conversion failed: {e}"))?;

    Ok(HtmlNode::branch("div", children))
}

/// Converts a markdown document straight to an HTML string.
pub fn render_document_to_html(markdown: &str) -> Result<String> {
    markdown_to_document(markdown)?.render()
}
