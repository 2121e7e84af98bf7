/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other block
/// test matches. Their lines are joined into one inline run.
pub struct Paragraph;

impl Paragraph {
    /// Separator used when joining a paragraph's lines.
    pub const LINE_JOIN: &'static str = " ";
}
