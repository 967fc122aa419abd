//! NumPy/SciPy docstring parser.
//!
//! A docstring has a free-text description, then optional "Parameters" and
//! "Returns" sections. A section header is the literal word on its own line
//! followed by a dash-rule line:
//!
//! ```text
//! Parameters
//! ----------
//! x : int
//!     The first addend.
//! ```

use crate::model::{DocBlock, Param};
use regex::Regex;
use std::sync::LazyLock;

/// Triple-quote delimiter of the docstring block.
const DELIM: &str = "\"\"\"";

// Trailing backslash used to visually continue a line; stripped before
// any pattern matching.
static RE_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\\[ \t]*$").unwrap());

// Section header: the word on its own line, then a dash-rule line.
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(Parameters|Returns)[ \t]*\r?\n[ \t]*-+[ \t]*$").unwrap()
});

// `name : rest` starts a new parameter entry.
static RE_PARAM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_]\w*)\s*:\s*(.*)$").unwrap());

static RE_WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs (including newlines) to single spaces and trim.
/// Idempotent.
pub fn clean(text: &str) -> String {
    RE_WS_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Parse a docstring block (with or without its `"""` delimiters) into a
/// DocBlock. Missing sections degrade to empty/absent values.
pub fn parse(block: &str) -> DocBlock {
    let stripped = RE_CONTINUATION.replace_all(block, "");
    let body = strip_delimiters(&stripped);

    // Locate section headers in textual order.
    let headers: Vec<(&str, usize, usize)> = RE_HEADER
        .captures_iter(body)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let name = caps.get(1).unwrap().as_str();
            (name, whole.start(), whole.end())
        })
        .collect();

    let description_end = headers.first().map_or(body.len(), |h| h.1);
    let description = clean(&body[..description_end]);

    let mut returns = None;
    let mut params = Vec::new();
    for (i, &(name, _, end)) in headers.iter().enumerate() {
        let span_end = headers.get(i + 1).map_or(body.len(), |h| h.1);
        let span = &body[end..span_end];
        match name {
            "Parameters" if params.is_empty() => params = parse_params(span),
            "Returns" if returns.is_none() => returns = Some(clean(span)),
            _ => {}
        }
    }

    DocBlock {
        description,
        returns,
        params,
    }
}

/// Cut the text between the first and last `"""` delimiter. Either or both
/// may be missing; whatever remains is taken as the body.
fn strip_delimiters(text: &str) -> &str {
    let start = match text.find(DELIM) {
        Some(pos) => pos + DELIM.len(),
        None => return text,
    };
    let end = match text[start..].rfind(DELIM) {
        Some(pos) => start + pos,
        None => text.len(),
    };
    &text[start..end]
}

/// Split a Parameters span into entries. A line matching `name : rest`
/// starts an entry; any other non-empty line continues the description of
/// the entry in progress, or is dropped when no entry has started yet.
fn parse_params(span: &str) -> Vec<Param> {
    let mut params: Vec<Param> = Vec::new();
    for line in span.lines() {
        if let Some(caps) = RE_PARAM_LINE.captures(line) {
            params.push(Param {
                name: caps[1].to_string(),
                ty: clean(&caps[2]),
                description: String::new(),
            });
        } else if !line.trim().is_empty() {
            if let Some(last) = params.last_mut() {
                let text = clean(line);
                if last.description.is_empty() {
                    last.description = text;
                } else {
                    last.description.push('\n');
                    last.description.push_str(&text);
                }
            }
            // No entry in progress — line is dropped.
        }
    }
    params
}
