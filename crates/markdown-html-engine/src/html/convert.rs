use crate::parsing::inline::TextFragment;

use super::node::HtmlNode;

impl From<TextFragment> for HtmlNode {
    /// Plain text becomes an untagged leaf; every other kind becomes a tagged
    /// leaf. Images carry their text in `alt` and have an empty value.
    fn from(fragment: TextFragment) -> Self {
        match fragment {
            TextFragment::Plain(text) => HtmlNode::text(text),
            TextFragment::Bold(text) => HtmlNode::leaf("b", text),
            TextFragment::Italic(text) => HtmlNode::leaf("i", text),
            TextFragment::Code(text) => HtmlNode::leaf("code", text),
            TextFragment::Link { text, destination } => {
                HtmlNode::leaf("a", text).with_attribute("href", destination)
            }
            TextFragment::Image { alt, destination } => HtmlNode::leaf("img", "")
                .with_attribute("src", destination)
                .with_attribute("alt", alt),
        }
    }
}

/// Converts fragments into leaf nodes, preserving order.
pub fn fragments_to_nodes(fragments: Vec<TextFragment>) -> Vec<HtmlNode> {
    fragments.into_iter().map(HtmlNode::from).collect()
}
