/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one leading `>` and the whitespace around the remainder.
    ///
    /// Returns `None` if the line is not a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
