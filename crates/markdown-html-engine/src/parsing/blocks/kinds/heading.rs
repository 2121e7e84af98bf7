/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `token` is made solely of 1 to 6 markers.
    pub fn level_of_token(token: &str) -> Option<usize> {
        let level = token.chars().count();
        let all_markers = token.chars().all(|c| c == Self::MARKER);
        (all_markers && (1..=Self::MAX_LEVEL).contains(&level)).then_some(level)
    }

    /// Number of leading marker characters in `block`.
    pub fn leading_markers(block: &str) -> usize {
        block.chars().take_while(|&c| c == Self::MARKER).count()
    }
}
