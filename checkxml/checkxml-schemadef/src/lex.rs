//! Lexical helpers applied to each schema line before parsing.

/// Cut a `//` comment off `line`, leaving back-quoted tags intact.
pub fn strip_line_comments(line: &str) -> &str {
    let mut in_tag = false;
    let bytes = line.as_bytes();
    let mut i = 0usize;
    while i + 1 < bytes.len() {
        match bytes[i] {
            b'`' => in_tag = !in_tag,
            b'/' if !in_tag && bytes[i + 1] == b'/' => return &line[..i],
            _ => {}
        }
        i += 1;
    }
    line
}
