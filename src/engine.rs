use crate::content::{DirSection, aggregate};
use crate::error::ProjdocError;
use crate::options::{FenceStyle, ProjdocOptions};
use crate::output::format_markdown;
use crate::tree::{TreeLine, render_tree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything needed to write the project document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Base name of the root directory, used as the level-1 title.
    pub title: String,
    pub tree: Vec<TreeLine>,
    /// Root section first, then every directory in tree order.
    pub sections: Vec<DirSection>,
    pub fence: FenceStyle,
}
impl Document {
    /// Renders the document as Markdown.
    pub fn to_markdown(&self) -> String {
        format_markdown(self)
    }
}

/// Builds the document for `options.root`: one tree walk, one content walk.
///
/// # Errors
///
/// Fails if the root does not exist, is not a directory, a directory below it
/// cannot be read, or an ignore pattern is not a valid glob.
pub fn projdoc(options: ProjdocOptions) -> Result<Document, ProjdocError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        ignored_dirs = ?options.ignore.dirs().collect::<Vec<_>>(),
        ignored_files = ?options.ignore.files().collect::<Vec<_>>(),
        "Starting projdoc with root: {}",
        options.root.display()
    );
    let tree = render_tree(&options)?;
    let sections = aggregate(&options)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        lines = tree.len(),
        directories = sections.len(),
        files = sections.iter().map(|s| s.files.len()).sum::<usize>(),
        "document assembled"
    );
    Ok(Document {
        title: project_name(&options.root),
        tree,
        sections,
        fence: options.fence,
    })
}

/// Shorthand for [`projdoc`] followed by [`Document::to_markdown`].
pub fn generate_markdown(options: ProjdocOptions) -> Result<String, ProjdocError> {
    projdoc(options).map(|doc| doc.to_markdown())
}

fn project_name(root: &Path) -> String {
    let name_of = |path: &Path| {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
    };
    name_of(root)
        .or_else(|| fs::canonicalize(root).ok().and_then(|abs| name_of(abs.as_path())))
        .unwrap_or_else(|| root.display().to_string())
}
