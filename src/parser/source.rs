//! Python source scanner — pairs `def` lines with the docstring that
//! follows them.
//!
//! Works equally on a whole `.py` file and on a block pasted into stdin.
//! A docstring with no preceding declaration (module docstring, bare
//! paste) still yields an entry, just without a signature.

use crate::model::{Document, Entry};
use crate::parser::{docstring, signature};
use regex::Regex;
use std::sync::LazyLock;

const DELIM: &str = "\"\"\"";

static RE_DEF_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*def\s").unwrap());

/// Scan source text into a Document.
pub fn parse(input: &str) -> Document {
    let lines: Vec<&str> = input.lines().collect();
    let mut entries = Vec::new();
    let mut pending: Option<crate::model::Signature> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if RE_DEF_LINE.is_match(line) {
            // Untyped or multi-line declarations extract to None, which
            // suppresses the rendered declaration for this entry.
            pending = signature::extract(line);
            i += 1;
            continue;
        }

        if let Some(open) = line.find(DELIM) {
            let mut block = String::from(line);
            let mut j = i + 1;
            // One-line docstring closes on the opening line.
            if !line[open + DELIM.len()..].contains(DELIM) {
                while j < lines.len() {
                    block.push('\n');
                    block.push_str(lines[j]);
                    j += 1;
                    if lines[j - 1].contains(DELIM) {
                        break;
                    }
                }
            }
            entries.push(Entry {
                doc: docstring::parse(&block),
                signature: pending.take(),
            });
            i = j;
            continue;
        }

        // Any other code line breaks the declaration/docstring pairing.
        if !line.trim().is_empty() && !line.trim_start().starts_with('#') {
            pending = None;
        }
        i += 1;
    }

    Document { entries }
}
