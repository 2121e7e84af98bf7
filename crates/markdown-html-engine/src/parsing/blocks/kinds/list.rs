/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Item text after the marker.
    pub fn item_text(line: &str) -> &str {
        skip_chars(line, Self::MARKER.len())
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, ...
pub struct OrderedList;

impl OrderedList {
    /// Characters stripped from the front of every item line.
    ///
    /// Fixed width: items numbered 10 or above keep part of their marker.
    pub const MARKER_WIDTH: usize = 3;

    /// The marker expected at zero-based line `index`.
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    /// Item text after the fixed-width marker.
    pub fn item_text(line: &str) -> &str {
        skip_chars(line, Self::MARKER_WIDTH)
    }
}

fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
