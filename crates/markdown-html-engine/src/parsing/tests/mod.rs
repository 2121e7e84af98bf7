//! Integration tests for the parsing module.
//!
//! Every test runs the full pipeline and checks the block and tree
//! invariants before looking at the output.

mod normalize;

use pretty_assertions::assert_eq;

use crate::{
    error::MarkdownError,
    html::HtmlNode,
    parsing::{blocks::split_into_blocks, markdown_to_document, render_document_to_html},
};

fn convert(md: &str) -> HtmlNode {
    invariants::check_blocks(md, &split_into_blocks(md));
    let doc = markdown_to_document(md).unwrap();
    invariants::check_tree(&doc);
    doc
}

#[test]
fn heading_and_paragraph_end_to_end() {
    assert_eq!(
        render_document_to_html("# Hi\n\nSome **bold** text.").unwrap(),
        "<div><h1>Hi</h1><p>Some <b>bold</b> text.</p></div>"
    );
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    assert_eq!(
        convert(md).render().unwrap(),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn code_block() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        convert(md).render().unwrap(),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn every_block_type_outline() {
    let md = "
## Shopping

> Buy _everything_
> today

- [milk](https://shop.example/milk)
- ![eggs](eggs.png)

1. first
2. second

```
raw
```
";
    let expected = r#"div
  h2
    "Shopping"
  blockquote
    "Buy "
    i "everything"
    " today"
  ul
    li
      a "milk" href="https://shop.example/milk"
    li
      img "" src="eggs.png" alt="eggs"
  ol
    li
      "first"
    li
      "second"
  pre
    code
      "raw\n"
"#;
    assert_eq!(normalize::outline(&convert(md)), expected);
}

#[test]
fn rendering_twice_is_identical() {
    let doc = convert("# a\n\n- b\n- c\n\n> d");
    assert_eq!(doc.render().unwrap(), doc.render().unwrap());
}

#[test]
fn indented_source_is_trimmed() {
    let md = "
    # Title

      - one
      - two
";
    assert_eq!(
        convert(md).render().unwrap(),
        "<div><h1>Title</h1><ul><li>one</li><li>two</li></ul></div>"
    );
}

#[test]
fn malformed_block_aborts_whole_document() {
    let err = markdown_to_document("# fine\n\nbroken **bold\n\nalso fine").unwrap_err();
    assert_eq!(
        err,
        MarkdownError::MalformedInline {
            text: "broken **bold".to_string(),
            delimiter: "**",
        }
    );
}

#[test]
fn empty_document_cannot_render() {
    // A div with no blocks has no children.
    let doc = markdown_to_document("").unwrap();
    assert!(doc.children().is_empty());
    assert_eq!(
        doc.render().unwrap_err(),
        MarkdownError::EmptyBranch {
            tag: "div".to_string()
        }
    );
}

#[test]
fn block_with_no_text_cannot_render() {
    let doc = markdown_to_document(">").unwrap();
    assert!(matches!(
        doc.render(),
        Err(MarkdownError::EmptyBranch { tag }) if tag == "blockquote"
    ));
}
