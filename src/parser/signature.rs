//! Signature extractor for typed single-line `def` declarations.
//!
//! `def add(self, x: int, y: int = 0) -> int:` yields name `add`, return
//! type `int`, and params `[(x, int), (y, int)]` — receiver dropped,
//! defaults stripped. Anything else (no `->` arrow, multi-line declaration)
//! yields `None`: not applicable, not an error.

use crate::model::{SigParam, Signature};
use regex::Regex;
use std::sync::LazyLock;

/// The implicit receiver parameter, never rendered.
const RECEIVER: &str = "self";

/// Sentinel type for parameters with no annotation.
pub const UNKNOWN_TYPE: &str = "?";

static RE_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*def\s+([A-Za-z_]\w*)\s*\((.*)\)\s*->\s*([^:]+):\s*$").unwrap()
});

/// Extract a Signature from a declaration line, or None when the line is
/// not a typed single-line declaration.
pub fn extract(line: &str) -> Option<Signature> {
    let caps = RE_DEF.captures(line)?;
    let params = split_params(&caps[2])
        .into_iter()
        .filter(|frag| frag.trim() != RECEIVER)
        .map(|frag| parse_param(&frag))
        .collect();
    Some(Signature {
        name: caps[1].to_string(),
        return_type: caps[3].trim().to_string(),
        params,
    })
}

/// Split the raw parameter list on commas, then re-merge fragments: a
/// fragment starts a new parameter only when it carries a type-annotation
/// colon or is exactly the receiver; otherwise it belongs to the previous
/// fragment's default value, and is rejoined with its comma.
///
/// Known gap: a default-value comma right after a parameter that itself has
/// no annotation still mis-splits (the follower is swallowed by the
/// un-annotated parameter). Kept as-is; see the test pinning it.
fn split_params(raw: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        if piece.trim().is_empty() {
            continue;
        }
        let starts_new =
            piece.contains(':') || piece.trim() == RECEIVER || fragments.is_empty();
        if starts_new {
            fragments.push(piece.to_string());
        } else if let Some(last) = fragments.last_mut() {
            last.push(',');
            last.push_str(piece);
        }
    }
    fragments
}

/// `name: type = default` → (name, type); no colon → (name, "?").
fn parse_param(fragment: &str) -> SigParam {
    match fragment.split_once(':') {
        Some((name, rest)) => SigParam {
            name: name.trim().to_string(),
            ty: rest.split('=').next().unwrap_or("").trim().to_string(),
        },
        None => SigParam {
            name: fragment.split('=').next().unwrap_or(fragment).trim().to_string(),
            ty: UNKNOWN_TYPE.to_string(),
        },
    }
}
