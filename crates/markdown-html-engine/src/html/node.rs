use crate::error::{MarkdownError, Result};

use super::attributes::Attributes;

/// A node in the output HTML tree.
///
/// Leaves carry a literal value and never have children; branches carry
/// children and never have a value of their own. Each node is owned by exactly
/// one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A literal value, optionally wrapped in a tag. Untagged leaves render as
    /// bare text.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// An element wrapping an ordered list of children.
    Branch {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// An untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Branch {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Adds an attribute, returning the node for chaining.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Branch { attributes, .. } => {
                attributes.insert(key, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Branch { tag, .. } => Some(tag),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => Some(value),
            HtmlNode::Branch { .. } => None,
        }
    }

    /// Children of a branch; always empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Branch { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Branch { attributes, .. } => attributes,
        }
    }

    /// Concatenated values of every leaf below this node, in document order.
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone(),
            HtmlNode::Branch { children, .. } => {
                children.iter().map(HtmlNode::text_content).collect()
            }
        }
    }

    /// Serializes the subtree rooted at this node.
    ///
    /// Fails if any branch has an empty tag or no children.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                open_tag(out, tag, attributes);
                out.push_str(value);
                close_tag(out, tag);
            }
            HtmlNode::Branch {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkdownError::MissingTag);
                }
                if children.is_empty() {
                    return Err(MarkdownError::EmptyBranch { tag: tag.clone() });
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
