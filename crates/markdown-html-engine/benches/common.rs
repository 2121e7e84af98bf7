// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> Quoted `code`\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "plain **bold** _italic_ `code` ![img](a.png) [link](b.html) ".repeat(repeats)
}
