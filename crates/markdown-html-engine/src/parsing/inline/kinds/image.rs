use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](destination)`.
///
/// The alt text may not contain `[` or `]`; the destination may not contain
/// `(` or `)`.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex"))
    }

    /// Reconstructs the literal source text of an image.
    pub fn literal(alt: &str, destination: &str) -> String {
        format!("{}[{alt}]({destination})", Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_captures_alt_and_destination() {
        let caps = Image::pattern().captures("see ![a cat](cat.png)").unwrap();
        assert_eq!(&caps[1], "a cat");
        assert_eq!(&caps[2], "cat.png");
    }

    #[test]
    fn pattern_rejects_nested_brackets() {
        assert!(!Image::pattern().is_match("![a [b] c](u)"));
    }

    #[test]
    fn literal_round_trips_match() {
        assert_eq!(Image::literal("a", "u.png"), "![a](u.png)");
    }
}
