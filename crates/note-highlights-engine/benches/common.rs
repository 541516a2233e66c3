// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with ==some highlighted content== inside.\n\n- Bullet point\n  - Nested ==item\nspanning lines== here\n- Another item with == a stray marker\n\nClosing paragraph == with the pair closed here ==.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_lines(lines: usize, width: usize) -> String {
    let mut content = String::new();
    for line in 0..lines {
        let fill = "x".repeat(width);
        content.push_str(&format!("{line} {fill} ==mark {line}== tail\n"));
    }
    content
}
