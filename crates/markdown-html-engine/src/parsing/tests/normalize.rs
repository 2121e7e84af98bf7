use crate::html::HtmlNode;

/// Renders a tree as an indented outline, one node per line.
///
/// Branches show their tag, tagged leaves show `tag "value"`, untagged leaves
/// show only the quoted value. Attributes follow in insertion order.
pub fn outline(node: &HtmlNode) -> String {
    let mut out = String::new();
    write_outline(node, 0, &mut out);
    out
}

fn write_outline(node: &HtmlNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    match node {
        HtmlNode::Leaf { tag, value, .. } => match tag {
            Some(tag) => out.push_str(&format!("{tag} {value:?}")),
            None => out.push_str(&format!("{value:?}")),
        },
        HtmlNode::Branch { tag, .. } => out.push_str(tag),
    }
    for (key, value) in node.attributes().iter() {
        out.push_str(&format!(" {key}={value:?}"));
    }
    out.push('\n');
    for child in node.children() {
        write_outline(child, depth + 1, out);
    }
}
