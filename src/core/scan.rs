//! Declaration scanning.
//!
//! Line-based extraction of `contract` declaration names. This is a textual
//! scan, not a Solidity parser: only lines whose trimmed content starts with
//! the keyword token are inspected, so a declaration appearing mid-line
//! (inside a comment or string, or after other tokens) is never detected.

const KEYWORD: &str = "contract";

/// Extract declaration names from file content, in file order.
///
/// A line matches when its first whitespace-separated token is exactly
/// `contract` and a second token follows. One trailing `{` is stripped from
/// the name, covering the `contract Foo{` spelling.
pub fn extract_declaration_names(content: &str) -> Vec<String> {
    let mut names = Vec::new();

    for line in content.lines() {
        let mut tokens = line.trim().split_whitespace();
        if tokens.next() != Some(KEYWORD) {
            continue;
        }
        let Some(raw) = tokens.next() else {
            continue;
        };
        let name = raw.strip_suffix('{').unwrap_or(raw);
        names.push(name.to_string());
    }

    names
}

/// Pick the output name for a file: the last declaration wins.
///
/// Returns `None` for an empty sequence, which callers treat as "skip this
/// file" rather than an error.
pub fn choose_output_name(names: &[String]) -> Option<&str> {
    names.last().map(String::as_str)
}
