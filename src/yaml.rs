//! Output fixups on top of `serde_yaml`.
//!
//! `serde_yaml` resolves scalars with the YAML 1.2 core schema, so strings
//! like `yes` or `off` come out plain. YAML 1.1 readers load those as
//! booleans; [`quote_yaml11_booleans`] single-quotes them.
use std::borrow::Cow;

/// Plain scalars a YAML 1.1 reader loads as booleans but 1.2 keeps as strings.
/// `true`/`false` spellings are already quoted by the serializer when they are strings.
pub const YAML11_BOOLEANS: [&str; 16] = [
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "on", "On", "ON", "off", "Off",
    "OFF",
];

#[derive(Clone, Copy)]
enum Block {
    Outside,
    /// Saw `|` / `>`; content is indented deeper than `column`.
    Header { column: usize },
    /// Inside a block scalar whose lines are indented at least `indent`.
    Content { indent: usize },
}

/// Quote mapping keys, mapping values and sequence items that are exactly a
/// YAML 1.1 boolean word. Block scalar content is left as is.
pub fn quote_yaml11_booleans(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    let mut block = Block::Outside;
    for line in yaml.split_inclusive('\n') {
        let body = line.trim_end_matches('\n');
        let indent = body.len() - body.trim_start_matches(' ').len();
        let blank = body.trim().is_empty();
        block = match block {
            Block::Header { column } if blank => Block::Header { column },
            Block::Header { column } if indent > column => Block::Content { indent },
            Block::Content { indent: min } if blank || indent >= min => {
                Block::Content { indent: min }
            }
            _ => Block::Outside,
        };
        if !matches!(block, Block::Outside) {
            out.push_str(line);
            continue;
        }
        let (fixed, header) = quote_line(body, indent);
        out.push_str(&fixed);
        out.push_str(&line[body.len()..]);
        if let Some(column) = header {
            block = Block::Header { column };
        }
    }
    out
}

/// Rewrite one line. Also returns the column its block scalar content must
/// exceed, if the line opens one.
fn quote_line(body: &str, indent: usize) -> (String, Option<usize>) {
    let mut pos = indent;
    while body[pos..].starts_with("- ") {
        pos += 2;
    }
    let (head, rest) = body.split_at(pos);
    match split_mapping(rest) {
        Some((key, value)) => {
            let header = is_block_header(value).then_some(pos);
            let key = quote_word(key);
            let line = if value.is_empty() {
                format!("{head}{key}:")
            } else {
                format!("{head}{key}: {}", quote_word(value))
            };
            (line, header)
        }
        None => {
            let header = is_block_header(rest).then_some(indent);
            (format!("{head}{}", quote_word(rest)), header)
        }
    }
}

/// `key: value` / `key:` → `(key, value)`. Handles quoted keys.
fn split_mapping(rest: &str) -> Option<(&str, &str)> {
    let bytes = rest.as_bytes();
    let key_end = match bytes.first()? {
        b'\'' => {
            let mut i = 1;
            loop {
                match bytes.get(i)? {
                    b'\'' if bytes.get(i + 1) == Some(&b'\'') => i += 2,
                    b'\'' => break i + 1,
                    _ => i += 1,
                }
            }
        }
        b'"' => {
            let mut i = 1;
            loop {
                match bytes.get(i)? {
                    b'\\' => i += 2,
                    b'"' => break i + 1,
                    _ => i += 1,
                }
            }
        }
        _ => {
            return match rest.find(": ") {
                Some(i) => Some((&rest[..i], &rest[i + 2..])),
                None => rest.strip_suffix(':').map(|key| (key, "")),
            };
        }
    };
    let (key, after) = rest.split_at(key_end);
    if let Some(value) = after.strip_prefix(": ") {
        Some((key, value))
    } else if after == ":" {
        Some((key, ""))
    } else {
        None
    }
}

fn is_block_header(value: &str) -> bool {
    value.starts_with('|') || value.starts_with('>')
}

fn quote_word(scalar: &str) -> Cow<'_, str> {
    if YAML11_BOOLEANS.contains(&scalar) {
        Cow::Owned(format!("'{scalar}'"))
    } else {
        Cow::Borrowed(scalar)
    }
}
