/// Fenced code block type. Only backtick fences are recognised.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True if the whole block starts and ends with a fence.
    pub fn encloses(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Raw content between the fences of an enclosed block.
    ///
    /// Drops the opening fence plus the single character after it (normally
    /// the newline) and the closing fence. Blocks too short to hold any
    /// content yield an empty string.
    pub fn content(block: &str) -> &str {
        let Some(inner) = block
            .strip_prefix(Self::FENCE)
            .and_then(|rest| rest.strip_suffix(Self::FENCE))
        else {
            return "";
        };
        let mut inner = inner.chars();
        inner.next();
        inner.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encloses_fenced_block() {
        assert!(CodeFence::encloses("```\ncode\n```"));
        assert!(!CodeFence::encloses("```\ncode"));
        assert!(!CodeFence::encloses("code\n```"));
    }

    #[test]
    fn content_strips_fences_and_newline() {
        assert_eq!(CodeFence::content("```\nfn main() {}\n```"), "fn main() {}\n");
    }

    #[test]
    fn content_of_short_blocks_is_empty() {
        assert_eq!(CodeFence::content("```"), "");
        assert_eq!(CodeFence::content("````"), "");
        assert_eq!(CodeFence::content("``````"), "");
        assert_eq!(CodeFence::content("```x```"), "");
    }

    #[test]
    fn single_line_fence_drops_first_char() {
        assert_eq!(CodeFence::content("```xyz```"), "yz");
    }
}
