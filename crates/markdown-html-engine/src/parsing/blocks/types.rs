use std::{fmt, str::FromStr};

use crate::error::MarkdownError;

/// The structural kind of a block, decided by [`classify_block`].
///
/// [`classify_block`]: super::classify::classify_block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    pub const ALL: [BlockType; 6] = [
        BlockType::Paragraph,
        BlockType::Heading,
        BlockType::Code,
        BlockType::Quote,
        BlockType::UnorderedList,
        BlockType::OrderedList,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MarkdownError::UnknownBlockType(s.to_string()))
    }
}
