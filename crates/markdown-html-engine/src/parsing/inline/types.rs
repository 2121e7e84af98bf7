/// The formatting kind of a [`TextFragment`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed span of inline text.
///
/// Links and images always carry a destination; the other kinds cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFragment {
    /// Text that is not part of any inline construct.
    Plain(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_`
    Italic(String),
    /// `` `code` ``
    Code(String),
    /// `[text](destination)`
    Link { text: String, destination: String },
    /// `![alt](destination)`
    Image { alt: String, destination: String },
}

impl TextFragment {
    pub fn plain(text: impl Into<String>) -> Self {
        TextFragment::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, destination: impl Into<String>) -> Self {
        TextFragment::Link {
            text: text.into(),
            destination: destination.into(),
        }
    }

    pub fn image(alt: impl Into<String>, destination: impl Into<String>) -> Self {
        TextFragment::Image {
            alt: alt.into(),
            destination: destination.into(),
        }
    }

    /// Builds a fragment of a kind that carries no destination.
    ///
    /// Returns `None` for [`FragmentKind::Link`] and [`FragmentKind::Image`].
    pub fn with_kind(kind: FragmentKind, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        match kind {
            FragmentKind::Plain => Some(TextFragment::Plain(text)),
            FragmentKind::Bold => Some(TextFragment::Bold(text)),
            FragmentKind::Italic => Some(TextFragment::Italic(text)),
            FragmentKind::Code => Some(TextFragment::Code(text)),
            FragmentKind::Link | FragmentKind::Image => None,
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self {
            TextFragment::Plain(_) => FragmentKind::Plain,
            TextFragment::Bold(_) => FragmentKind::Bold,
            TextFragment::Italic(_) => FragmentKind::Italic,
            TextFragment::Code(_) => FragmentKind::Code,
            TextFragment::Link { .. } => FragmentKind::Link,
            TextFragment::Image { .. } => FragmentKind::Image,
        }
    }

    /// The fragment's text. For images this is the alt text.
    pub fn text(&self) -> &str {
        match self {
            TextFragment::Plain(text)
            | TextFragment::Bold(text)
            | TextFragment::Italic(text)
            | TextFragment::Code(text)
            | TextFragment::Link { text, .. } => text,
            TextFragment::Image { alt, .. } => alt,
        }
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            TextFragment::Link { destination, .. } | TextFragment::Image { destination, .. } => {
                Some(destination)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(TextFragment::plain("a"), TextFragment::plain("a"));
        assert_ne!(TextFragment::plain("a"), TextFragment::Bold("a".into()));
        assert_ne!(
            TextFragment::link("a", "https://x.dev"),
            TextFragment::link("a", "https://y.dev")
        );
    }

    #[test]
    fn destination_only_for_links_and_images() {
        assert_eq!(TextFragment::plain("a").destination(), None);
        assert_eq!(TextFragment::Code("a".into()).destination(), None);
        assert_eq!(TextFragment::link("a", "u").destination(), Some("u"));
        assert_eq!(TextFragment::image("a", "u").destination(), Some("u"));
    }

    #[test]
    fn with_kind_refuses_destination_kinds() {
        assert_eq!(
            TextFragment::with_kind(FragmentKind::Italic, "x"),
            Some(TextFragment::Italic("x".into()))
        );
        assert_eq!(TextFragment::with_kind(FragmentKind::Link, "x"), None);
        assert_eq!(TextFragment::with_kind(FragmentKind::Image, "x"), None);
    }

    #[test]
    fn image_text_is_alt() {
        let image = TextFragment::image("a cat", "cat.png");
        assert_eq!(image.text(), "a cat");
        assert_eq!(image.kind(), FragmentKind::Image);
    }
}
