use log::trace;

use crate::error::{MarkdownError, Result};

use super::{
    extract::{extract_markdown_images, extract_markdown_links},
    kinds::{Delimited, Image, Link},
    types::TextFragment,
};

/// Parses raw inline text into an ordered sequence of [`TextFragment`]s.
///
/// Stages run in a fixed order: bold, italic, code, images, links. Each stage
/// only re-splits fragments that are still plain, so text claimed by an
/// earlier stage is never reinterpreted.
///
/// # Errors
/// [`MarkdownError::MalformedInline`] if a plain run contains an odd number
/// of `**`, `_` or `` ` `` delimiters.
pub fn parse_inline(text: &str) -> Result<Vec<TextFragment>> {
    let mut fragments = vec![TextFragment::plain(text)];
    for delimited in Delimited::ORDER {
        fragments = split_delimited(fragments, delimited)?;
        trace!(
            "after {:?} split: {} fragment(s)",
            delimited.kind,
            fragments.len()
        );
    }
    fragments = split_images(fragments);
    fragments = split_links(fragments);
    trace!("inline parse produced {} fragment(s)", fragments.len());
    Ok(fragments)
}

/// Splits every plain fragment on `delimited.delimiter`.
///
/// Parts at odd positions become `delimited.kind`; parts at even positions
/// stay plain. Empty parts are dropped.
pub fn split_delimited(
    fragments: Vec<TextFragment>,
    delimited: Delimited,
) -> Result<Vec<TextFragment>> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let text = match fragment {
            TextFragment::Plain(text) => text,
            typed => {
                out.push(typed);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(delimited.delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::MalformedInline {
                text: text.clone(),
                delimiter: delimited.delimiter,
            });
        }

        for (index, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let fragment = if index % 2 == 0 {
                TextFragment::plain(part)
            } else {
                match TextFragment::with_kind(delimited.kind, part) {
                    Some(fragment) => fragment,
                    None => continue,
                }
            };
            out.push(fragment);
        }
    }
    Ok(out)
}

/// Pulls `![alt](destination)` out of every plain fragment.
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_matches(
        fragments,
        extract_markdown_images,
        Image::literal,
        |alt, destination| TextFragment::Image { alt, destination },
    )
}

/// Pulls `[text](destination)` out of every plain fragment.
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_matches(
        fragments,
        extract_markdown_links,
        Link::literal,
        |text, destination| TextFragment::Link { text, destination },
    )
}

fn split_matches(
    fragments: Vec<TextFragment>,
    extract: fn(&str) -> Vec<(String, String)>,
    literal: fn(&str, &str) -> String,
    build: fn(String, String) -> TextFragment,
) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let text = match fragment {
            TextFragment::Plain(text) => text,
            typed => {
                out.push(typed);
                continue;
            }
        };

        let matches = extract(&text);
        if matches.is_empty() {
            out.push(TextFragment::Plain(text));
            continue;
        }

        let mut remaining = text.as_str();
        for (label, destination) in matches {
            let source = literal(&label, &destination);
            let Some((before, after)) = remaining.split_once(source.as_str()) else {
                continue;
            };
            if !before.is_empty() {
                out.push(TextFragment::plain(before));
            }
            out.push(build(label, destination));
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(TextFragment::plain(remaining));
        }
    }
    out
}
