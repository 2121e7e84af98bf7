/// Splits a markdown document into trimmed blocks.
///
/// One or more blank (whitespace-only) lines end a block. Every line of a
/// block is trimmed independently and empty blocks are never returned.
pub fn split_into_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        blocks.push(current.join("\n"));
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            split_into_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn runs_of_blank_lines_are_one_boundary() {
        assert_eq!(split_into_blocks("a\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        assert_eq!(split_into_blocks("a\n   \t\nb"), vec!["a", "b"]);
    }

    #[test]
    fn lines_are_trimmed_individually() {
        assert_eq!(split_into_blocks("  - a  \n   - b"), vec!["- a\n- b"]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(split_into_blocks("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn empty_and_blank_documents() {
        assert!(split_into_blocks("").is_empty());
        assert!(split_into_blocks("\n\n   \n").is_empty());
    }
}
