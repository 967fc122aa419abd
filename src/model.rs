//! Data model for translated documentation — format-agnostic.

/// Everything extracted from one input (a pasted block or a source file).
#[derive(Debug, Default)]
pub struct Document {
    pub entries: Vec<Entry>,
}

/// One documented function: its docstring and, when the declaration line
/// matched the typed single-line shape, its extracted signature.
#[derive(Debug, Default)]
pub struct Entry {
    pub doc: DocBlock,
    pub signature: Option<Signature>,
}

/// Parsed docstring content.
#[derive(Debug, Default)]
pub struct DocBlock {
    /// Free text before the first section header, whitespace-collapsed.
    pub description: String,
    /// Returns section body, whitespace-collapsed. None when the section
    /// is absent — a normal outcome, not an error.
    pub returns: Option<String>,
    /// Parameters in textual order of appearance.
    pub params: Vec<Param>,
}

/// One `name : type` entry from a Parameters section.
#[derive(Debug, Default, PartialEq)]
pub struct Param {
    pub name: String,
    /// Text after the colon on the entry line. May be empty.
    pub ty: String,
    /// Continuation lines, normalized per line and joined with newlines.
    pub description: String,
}

/// Extracted from a `def name(params) -> ret:` declaration line.
#[derive(Debug, Default, PartialEq)]
pub struct Signature {
    pub name: String,
    pub return_type: String,
    /// Declared parameters, receiver excluded, defaults stripped.
    pub params: Vec<SigParam>,
}

#[derive(Debug, PartialEq)]
pub struct SigParam {
    pub name: String,
    /// Type annotation, or the `"?"` sentinel when none was given.
    pub ty: String,
}
