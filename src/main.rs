//! pydox — translate NumPy-style docstrings into Doxygen comment blocks
//! and C++ member declarations.
//!
//! Two modes:
//!
//! - **stdin mode**: paste a docstring (optionally preceded by its `def`
//!   line), finish with a single `=` line: `pydox`
//! - **file mode**: `pydox -o headers src/*.py`

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Line that terminates interactive input. Not part of the accumulated text.
const SENTINEL: &str = "=";

#[derive(Parser)]
#[command(
    name = "pydox",
    about = "Translate NumPy-style docstrings into Doxygen/C++ documentation"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin
    /// until a single `=` line.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: cpp (default), json
    #[arg(short = 'f', long, default_value = "cpp")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: accumulate lines until the sentinel, translate, print.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let input = read_until_sentinel(stdin.lock(), SENTINEL)?;

    let doc = parser::source::parse(&input);
    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc));
    Ok(())
}

/// Accumulate lines from a reader until a line equal to the sentinel (or
/// end of input). The sentinel line is not included.
fn read_until_sentinel(reader: impl BufRead, sentinel: &str) -> Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line.context("failed to read stdin")?;
        if line == sentinel {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

/// file mode: process Python files, write one output per input.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let doc = match parser::parse_file(path, &content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        // Skip files with nothing documented
        if doc.entries.is_empty() {
            continue;
        }

        let name = derive_output_name(&path.to_string_lossy());
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["py", "pyi"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "lib/vector.py" → "vector"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename
        .strip_suffix(".py")
        .or_else(|| filename.strip_suffix(".pyi"))
        .unwrap_or(filename)
        .to_string()
}
