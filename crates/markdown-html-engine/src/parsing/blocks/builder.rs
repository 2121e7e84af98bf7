use log::debug;

use crate::{
    error::{MarkdownError, Result},
    html::{HtmlNode, fragments_to_nodes},
    parsing::inline::parse_inline,
};

use super::{
    classify::classify_block,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Classifies `block` and builds its subtree.
pub fn block_to_node(block: &str) -> Result<HtmlNode> {
    let block_type = classify_block(block);
    debug!("block classified as {block_type}: {:?}", preview(block));
    build_block(block_type, block)
}

/// Builds the subtree for a block already known to be of `block_type`.
pub fn build_block(block_type: BlockType, block: &str) -> Result<HtmlNode> {
    match block_type {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading => heading_to_node(block),
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => unordered_list_to_node(block),
        BlockType::OrderedList => ordered_list_to_node(block),
    }
}

/// Inline-parses `text` and converts every fragment to a leaf.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(fragments_to_nodes(parse_inline(text)?))
}

pub fn paragraph_to_node(block: &str) -> Result<HtmlNode> {
    let text = block.split('\n').collect::<Vec<_>>().join(Paragraph::LINE_JOIN);
    Ok(HtmlNode::branch("p", text_to_children(&text)?))
}

/// `### Title` becomes `<h3>Title</h3>`.
pub fn heading_to_node(block: &str) -> Result<HtmlNode> {
    let level = Heading::leading_markers(block);
    let invalid = || MarkdownError::InvalidHeading {
        level,
        block: block.to_string(),
    };

    if !(1..=Heading::MAX_LEVEL).contains(&level) {
        return Err(invalid());
    }
    // The marker is followed by one separator character before the text.
    let text = match block.char_indices().nth(level + 1) {
        Some((start, _)) => &block[start..],
        None => return Err(invalid()),
    };

    Ok(HtmlNode::branch(
        format!("h{level}"),
        text_to_children(text)?,
    ))
}

/// Fenced code keeps its content verbatim inside `<pre><code>`.
pub fn code_to_node(block: &str) -> Result<HtmlNode> {
    if !CodeFence::encloses(block) {
        return Err(MarkdownError::InvalidCodeBlock {
            block: block.to_string(),
        });
    }
    let code = HtmlNode::branch("code", vec![HtmlNode::text(CodeFence::content(block))]);
    Ok(HtmlNode::branch("pre", vec![code]))
}

pub fn quote_to_node(block: &str) -> Result<HtmlNode> {
    let lines = block
        .split('\n')
        .map(|line| {
            BlockQuote::strip_prefix(line).ok_or_else(|| MarkdownError::InvalidQuoteLine {
                line: line.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let text = lines.join(" ");
    Ok(HtmlNode::branch("blockquote", text_to_children(&text)?))
}

pub fn unordered_list_to_node(block: &str) -> Result<HtmlNode> {
    list_to_node("ul", block, UnorderedList::item_text)
}

pub fn ordered_list_to_node(block: &str) -> Result<HtmlNode> {
    list_to_node("ol", block, OrderedList::item_text)
}

fn list_to_node(tag: &str, block: &str, item_text: fn(&str) -> &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| Ok(HtmlNode::branch("li", text_to_children(item_text(line))?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::branch(tag, items))
}

fn preview(block: &str) -> &str {
    const MAX: usize = 40;
    match block.char_indices().nth(MAX) {
        Some((idx, _)) => &block[..idx],
        None => block,
    }
}
