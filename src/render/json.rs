//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model directly as JSON.

use crate::model::{Entry, Signature};
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &crate::model::Document) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("  \"entries\": [\n");
        for (i, entry) in doc.entries.iter().enumerate() {
            out.push_str(&render_entry(entry));
            if i < doc.entries.len() - 1 {
                out.push_str(",\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str("  ]\n");
        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_entry(entry: &Entry) -> String {
    let mut out = String::new();
    out.push_str("    {\n");

    out.push_str(&format!(
        "      \"brief\": \"{}\",\n",
        json_escape(&entry.doc.description)
    ));

    if !entry.doc.params.is_empty() {
        out.push_str("      \"params\": [\n");
        for (i, param) in entry.doc.params.iter().enumerate() {
            let comma = if i < entry.doc.params.len() - 1 { "," } else { "" };
            out.push_str(&format!(
                "        {{ \"name\": \"{}\", \"type\": \"{}\", \"description\": \"{}\" }}{}",
                json_escape(&param.name),
                json_escape(&param.ty),
                json_escape(&param.description),
                comma
            ));
            out.push('\n');
        }
        out.push_str("      ],\n");
    }

    if let Some(ref ret) = entry.doc.returns {
        out.push_str(&format!(
            "      \"returns\": \"{}\",\n",
            json_escape(ret)
        ));
    }

    if let Some(ref sig) = entry.signature {
        out.push_str(&render_signature(sig));
    }

    // Remove trailing comma from last field
    let trimmed = out.trim_end().trim_end_matches(',').to_string();
    out = trimmed;
    out.push('\n');
    out.push_str("    }");
    out
}

fn render_signature(sig: &Signature) -> String {
    let mut out = String::new();
    out.push_str("      \"signature\": {\n");
    out.push_str(&format!(
        "        \"name\": \"{}\",\n",
        json_escape(&sig.name)
    ));
    out.push_str(&format!(
        "        \"return_type\": \"{}\",\n",
        json_escape(&sig.return_type)
    ));
    out.push_str("        \"params\": [");
    for (i, param) in sig.params.iter().enumerate() {
        let comma = if i < sig.params.len() - 1 { "," } else { "" };
        out.push_str(&format!(
            " {{ \"name\": \"{}\", \"type\": \"{}\" }}{}",
            json_escape(&param.name),
            json_escape(&param.ty),
            comma
        ));
    }
    out.push_str(" ]\n");
    out.push_str("      },\n");
    out
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocBlock, Document, Param, SigParam};

    #[test]
    fn renders_entry_fields() {
        let doc = Document {
            entries: vec![Entry {
                doc: DocBlock {
                    description: "Add two integers.".to_string(),
                    returns: Some("int The sum.".to_string()),
                    params: vec![Param {
                        name: "x".to_string(),
                        ty: "int".to_string(),
                        description: "The first addend.".to_string(),
                    }],
                },
                signature: Some(Signature {
                    name: "add".to_string(),
                    return_type: "int".to_string(),
                    params: vec![SigParam {
                        name: "x".to_string(),
                        ty: "int".to_string(),
                    }],
                }),
            }],
        };
        let out = JsonRenderer.render(&doc);
        assert!(out.contains("\"brief\": \"Add two integers.\""));
        assert!(out.contains("\"returns\": \"int The sum.\""));
        assert!(out.contains("\"return_type\": \"int\""));
        assert!(out.contains("{ \"name\": \"x\", \"type\": \"int\" }"));
    }

    #[test]
    fn omits_absent_fields() {
        let doc = Document {
            entries: vec![Entry::default()],
        };
        let out = JsonRenderer.render(&doc);
        assert!(!out.contains("\"returns\""));
        assert!(!out.contains("\"signature\""));
        assert!(!out.contains("\"params\""));
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(json_escape("a \"b\"\nc"), "a \\\"b\\\"\\nc");
    }
}
