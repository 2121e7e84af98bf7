use std::sync::OnceLock;

use regex::Regex;

use super::Image;

/// Link inline type: `[text](destination)`.
///
/// A match directly preceded by [`Image::MARKER`] is an image, not a link.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX
            .get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex"))
    }

    /// True if the match starting at byte `start` of `text` belongs to an image.
    pub fn is_image_at(text: &str, start: usize) -> bool {
        text[..start].ends_with(Image::MARKER)
    }

    pub fn literal(text: &str, destination: &str) -> String {
        format!("[{text}]({destination})")
    }
}
