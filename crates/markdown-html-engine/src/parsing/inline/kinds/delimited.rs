use crate::parsing::inline::types::FragmentKind;

/// A symmetric delimiter that wraps a span of a single fragment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub delimiter: &'static str,
    pub kind: FragmentKind,
}

impl Delimited {
    pub const BOLD: Delimited = Delimited {
        delimiter: "**",
        kind: FragmentKind::Bold,
    };

    pub const ITALIC: Delimited = Delimited {
        delimiter: "_",
        kind: FragmentKind::Italic,
    };

    pub const CODE: Delimited = Delimited {
        delimiter: "`",
        kind: FragmentKind::Code,
    };

    /// Split order. Bold runs before italic so `**` is consumed before `_` is
    /// considered.
    pub const ORDER: [Delimited; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}
