//! Renders the directory structure as indented tree lines.

use crate::error::ProjdocError;
use crate::options::ProjdocOptions;
use crate::walk::{DirListing, walk};
use serde::{Deserialize, Serialize};
use std::fmt;

const INDENT: &str = "│   ";
const BRANCH: &str = "├── ";

/// A single line of the tree diagram.
///
/// Every entry uses the same `├── ` branch glyph, the last sibling included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLine {
    /// Depth of the directory the line belongs to: a file directly in the root
    /// is at depth 0, a subdirectory of the root (and its name line) at depth 1.
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}
impl TreeLine {
    /// The characters printed before the glyph.
    pub fn indent(&self) -> String {
        if self.is_dir {
            INDENT.repeat(self.depth.saturating_sub(1))
        } else {
            INDENT.repeat(self.depth)
        }
    }
}
impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.indent(), BRANCH, self.name)?;
        if self.is_dir {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// Walks `options.root` and returns the tree lines for everything below it.
///
/// The root itself has no line. A directory whose contents are all ignored
/// still gets its own name line.
///
/// # Errors
///
/// Fails if the root is missing or a directory cannot be read.
pub fn render_tree(options: &ProjdocOptions) -> Result<Vec<TreeLine>, ProjdocError> {
    let listings = walk(options)?;
    Ok(lines_from_listings(&listings))
}

pub(crate) fn lines_from_listings(listings: &[DirListing]) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    for listing in listings {
        if listing.depth > 0 {
            let name = listing
                .relative
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(TreeLine {
                depth: listing.depth,
                name,
                is_dir: true,
            });
        }
        for file in &listing.files {
            lines.push(TreeLine {
                depth: listing.depth,
                name: file.clone(),
                is_dir: false,
            });
        }
    }
    lines
}

/// Joins tree lines with newlines, without a trailing newline.
pub fn tree_to_string(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
