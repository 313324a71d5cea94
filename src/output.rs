//! Output formatting for projdoc documents.
//!
//! Provides functions to format a [`Document`] into Markdown or JSON.
//! File contents and the directory tree are written as collected, without escaping.

use crate::options::FenceStyle;
use crate::tree::tree_to_string;
use crate::{Document, ProjdocError};
use std::fs;
use std::path::Path;

/// File stem of the generated document when no output path is given.
pub const DEFAULT_OUTPUT_STEM: &str = "project_documentation";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// Default output file name for this format, e.g. `project_documentation.md`.
    pub fn default_file_name(&self) -> String {
        format!("{}.{}", DEFAULT_OUTPUT_STEM, self.extension())
    }
}

/// Formats the document into a string.
pub fn format_document(
    doc: &Document,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ProjdocError> {
    match format {
        OutputFormat::Markdown => Ok(format_markdown(doc)),
        OutputFormat::Json => format_json(doc, pretty),
    }
}

/// Writes the formatted document to a file, replacing any existing file.
pub fn write_document_to_file(
    doc: &Document,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ProjdocError> {
    let content = format_document(doc, format, pretty)?;
    fs::write(&path, content).map_err(|e| ProjdocError::io(path.as_ref(), e))?;
    Ok(())
}

/// Returns the fence to wrap `body` in.
pub fn fence_for(body: &str, style: FenceStyle) -> String {
    match style {
        FenceStyle::Fixed => "```".to_string(),
        FenceStyle::Adaptive => "`".repeat(longest_backtick_run(body).max(2) + 1),
    }
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

// ----------------------- Internal formatting -----------------------

pub(crate) fn format_markdown(doc: &Document) -> String {
    let tree = tree_to_string(&doc.tree);
    let tree_fence = fence_for(&tree, doc.fence);
    let mut parts = vec![
        format!("# {}\n", doc.title),
        "## Directory Structure\n".to_string(),
        tree_fence.clone(),
        tree,
        format!("{}\n", tree_fence),
        "## File Contents\n".to_string(),
    ];

    for section in &doc.sections {
        if !section.is_root() {
            let hashes = "#".repeat(usize::from(section.heading_level));
            parts.push(format!("{} {}\n", hashes, section.relative_path));
        }
        for record in &section.files {
            let body = record.content.as_str();
            let fence = fence_for(body, doc.fence);
            parts.push(format!("**{}:**", record.file_name));
            parts.push(format!("{}{}", fence, record.language));
            parts.push(body.to_string());
            parts.push(format!("{}\n", fence));
        }
    }
    parts.join("\n")
}

fn format_json(doc: &Document, pretty: bool) -> Result<String, ProjdocError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}
