//! C++ header renderer — Doxygen comment blocks plus member declarations.
//!
//! Each entry becomes a `@brief`/`@param`/`@return` block; when a signature
//! was extracted, a read-only member declaration follows:
//!
//! ```text
//! /**
//!  * @brief Add two integers.
//!  *
//!  * @param x int The first addend.
//!  * @return int The sum.
//!  */
//! int add(const int& x) const;
//! ```

use crate::model::{DocBlock, Document, Signature};
use crate::render::Renderer;

/// Continuation prefix for lines embedded in a comment-block tag.
const CONT: &str = "\n *   ";

pub struct CppRenderer;

impl Renderer for CppRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();
        for (i, entry) in doc.entries.iter().enumerate() {
            output.push_str(&render_comment(&entry.doc));
            if let Some(ref sig) = entry.signature {
                output.push_str(&render_declaration(sig));
                output.push('\n');
            }
            if i + 1 < doc.entries.len() {
                output.push('\n');
            }
        }
        output
    }

    fn file_extension(&self) -> &str {
        "h"
    }
}

/// Render a DocBlock as a Doxygen comment.
///
/// Exactly one `@brief`; one `@param` per parameter in source order, with
/// the type when present; `@return` only when a Returns section existed.
fn render_comment(doc: &DocBlock) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("/**".to_string());

    if doc.description.is_empty() {
        lines.push(" * @brief".to_string());
    } else {
        lines.push(format!(
            " * @brief {}",
            doc.description.replace('\n', "\n * ")
        ));
    }

    if !doc.params.is_empty() || doc.returns.is_some() {
        lines.push(" *".to_string());
    }

    for param in &doc.params {
        let mut tag = format!(" * @param {}", param.name);
        if !param.ty.is_empty() {
            tag.push(' ');
            tag.push_str(&param.ty);
        }
        if !param.description.is_empty() {
            tag.push(' ');
            tag.push_str(&param.description.replace('\n', CONT));
        }
        lines.push(tag);
    }

    if let Some(ref ret) = doc.returns {
        lines.push(format!(" * @return {}", ret));
    }

    lines.push(" */".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// `int add(const int& x,const int& y) const;`
fn render_declaration(sig: &Signature) -> String {
    let params = sig
        .params
        .iter()
        .map(|p| format!("const {}& {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(",");
    format!("{} {}({}) const;", sig.return_type, sig.name, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Param, SigParam};

    fn block(desc: &str, returns: Option<&str>, params: Vec<Param>) -> DocBlock {
        DocBlock {
            description: desc.to_string(),
            returns: returns.map(str::to_string),
            params,
        }
    }

    fn param(name: &str, ty: &str, desc: &str) -> Param {
        Param {
            name: name.to_string(),
            ty: ty.to_string(),
            description: desc.to_string(),
        }
    }

    #[test]
    fn full_block() {
        let doc = block(
            "Add two integers.",
            Some("int The sum."),
            vec![
                param("x", "int", "The first addend."),
                param("y", "int", "The second addend."),
            ],
        );
        assert_eq!(
            render_comment(&doc),
            "/**\n * @brief Add two integers.\n *\n * @param x int The first addend.\n * @param y int The second addend.\n * @return int The sum.\n */\n"
        );
    }

    #[test]
    fn no_returns_omits_tag() {
        let doc = block("Desc.", None, vec![param("x", "int", "A value.")]);
        let out = render_comment(&doc);
        assert!(!out.contains("@return"));
        assert_eq!(out.matches("@param").count(), 1);
    }

    #[test]
    fn no_params_omits_tag() {
        let doc = block("Desc.", Some("bool Whether it worked."), vec![]);
        let out = render_comment(&doc);
        assert!(!out.contains("@param"));
        assert_eq!(out.matches("@return").count(), 1);
    }

    #[test]
    fn description_only_block() {
        let doc = block("Just this.", None, vec![]);
        assert_eq!(render_comment(&doc), "/**\n * @brief Just this.\n */\n");
    }

    #[test]
    fn multiline_param_description_reindented() {
        let doc = block(
            "Desc.",
            None,
            vec![param("y", "int", "Defaults\nto zero.")],
        );
        let out = render_comment(&doc);
        assert!(out.contains(" * @param y int Defaults\n *   to zero.\n"));
    }

    #[test]
    fn declaration_round_trip() {
        let sig = Signature {
            name: "add".to_string(),
            return_type: "int".to_string(),
            params: vec![
                SigParam {
                    name: "x".to_string(),
                    ty: "int".to_string(),
                },
                SigParam {
                    name: "y".to_string(),
                    ty: "int".to_string(),
                },
            ],
        };
        assert_eq!(
            render_declaration(&sig),
            "int add(const int& x,const int& y) const;"
        );
    }

    #[test]
    fn declaration_no_params() {
        let sig = Signature {
            name: "reset".to_string(),
            return_type: "None".to_string(),
            params: vec![],
        };
        assert_eq!(render_declaration(&sig), "None reset() const;");
    }
}
