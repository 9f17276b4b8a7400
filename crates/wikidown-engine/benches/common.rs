// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wiki_page(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with [[Some Page]] and ==marked== text.[^n]\n\n- Bullet point\n  - Nested item\n- [x] Done item\n\n| a | b |\n|---|--:|\n| [[T|L]] | 2 |\n\n> [!NOTE]\n> An alert.\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    let mut page = base.repeat(size);
    page.push_str("[^n]: The footnote.\n");
    page
}

#[allow(dead_code)]
pub fn generate_plain_markdown(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some *content*.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}
