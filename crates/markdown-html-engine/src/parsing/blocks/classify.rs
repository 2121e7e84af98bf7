use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Decides the [`BlockType`] of one trimmed block.
///
/// Tests run in a fixed order and the first match wins; anything unmatched is
/// a paragraph. Only line prefixes are inspected, nothing is parsed.
pub fn classify_block(block: &str) -> BlockType {
    if is_heading(block) {
        BlockType::Heading
    } else if CodeFence::encloses(block) {
        BlockType::Code
    } else if block.split('\n').all(BlockQuote::is_quote_line) {
        BlockType::Quote
    } else if block.split('\n').all(UnorderedList::is_item) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// The text before the first space must be 1 to 6 `#` characters.
fn is_heading(block: &str) -> bool {
    let token = block.split(' ').next().unwrap_or_default();
    Heading::level_of_token(token).is_some()
}

/// Every line except the last must carry its one-based number.
///
/// The last line is never checked, so a single-line block is never an ordered
/// list.
fn is_ordered_list(block: &str) -> bool {
    let lines: Vec<&str> = block.split('\n').collect();
    let checked = &lines[..lines.len() - 1];
    !checked.is_empty()
        && checked
            .iter()
            .enumerate()
            .all(|(index, line)| line.starts_with(&OrderedList::marker(index)))
}
