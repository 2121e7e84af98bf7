/// Errors raised while converting markdown into an HTML tree or rendering it.
///
/// Every variant is a deterministic validation failure of the input; none of
/// them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Malformed inline markup: {text:?} does not contain a matching pair of {delimiter:?}")]
    MalformedInline {
        text: String,
        delimiter: &'static str,
    },

    #[error("Invalid heading level {level}: {block:?}")]
    InvalidHeading { level: usize, block: String },

    #[error("Invalid code block, expected ``` fences around: {block:?}")]
    InvalidCodeBlock { block: String },

    #[error("Invalid quote line, expected leading '>': {line:?}")]
    InvalidQuoteLine { line: String },

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("Branch node has no tag")]
    MissingTag,

    #[error("Branch node <{tag}> has no children")]
    EmptyBranch { tag: String },
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
