//! Collects the contents of every non-ignored file, grouped by directory.

use crate::error::ProjdocError;
use crate::language::language_for;
use crate::options::{BinaryDetection, ProjdocOptions};
use crate::walk::walk;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path};

pub const MAX_HEADING_LEVEL: u8 = 6;
const BINARY_PLACEHOLDER: &str = "<<Binary file or encoding not supported>>";
const INSPECT_LEN: usize = 4096;

/// What ended up in the document for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FileContent {
    Text(String),
    /// Stand-in text when the file could not be read or was detected as binary.
    Placeholder(String),
}
impl FileContent {
    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Text(text) | FileContent::Placeholder(text) => text,
        }
    }
    pub fn is_placeholder(&self) -> bool {
        matches!(self, FileContent::Placeholder(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Directory relative to the root, `/`-separated; `.` for the root.
    pub relative_dir: String,
    pub file_name: String,
    /// Fence tag, empty when the extension is not known.
    pub language: String,
    pub content: FileContent,
}

/// A directory of the file-contents section and the files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirSection {
    /// `/`-separated path relative to the root; `.` for the root.
    pub relative_path: String,
    pub depth: usize,
    pub heading_level: u8,
    pub files: Vec<ContentRecord>,
}
impl DirSection {
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Heading level for a directory at `depth` path components below the root.
///
/// The root is the level-1 title. Subdirectories start at level 3, below the
/// level-2 "File Contents" heading, and never go deeper than 6.
pub fn heading_level(depth: usize) -> u8 {
    if depth == 0 {
        return 1;
    }
    depth
        .saturating_add(2)
        .min(MAX_HEADING_LEVEL as usize) as u8
}

/// Reads a file as UTF-8, falling back to Latin-1 when it is not valid UTF-8.
/// Line endings are normalized to `\n`.
///
/// Never fails: I/O errors become a placeholder carrying the error text, so a
/// single unreadable file cannot abort a run.
pub fn read_file_content(path: &Path, binary_detection: BinaryDetection) -> FileContent {
    let bytes = match read_bytes(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!(path = %path.display(), error = %e, "could not read file");
            return FileContent::Placeholder(format!("<<Error reading file: {}>>", e));
        }
    };
    let head = &bytes[..bytes.len().min(INSPECT_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return FileContent::Placeholder(BINARY_PLACEHOLDER.to_string());
    }
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Not UTF-8, decoding as Latin-1: {}", path.display());
            decode_latin1(e.as_bytes())
        }
    };
    FileContent::Text(normalize_newlines(text))
}

// `\r\n` and lone `\r` both become `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

// Every byte maps to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Renders a root-relative path with `/` separators, `.` for the root itself.
fn display_relative(relative: &Path) -> String {
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Walks `options.root` and reads every non-ignored file.
///
/// Sections come in the same order as the tree lines from
/// [`render_tree`](crate::render_tree): the root first, then each directory
/// before its subdirectories, with files sorted by name. Every directory
/// reached gets a section, even one without files.
///
/// # Errors
///
/// Fails if the root is missing or a directory cannot be read. Unreadable
/// files do not fail the walk.
pub fn aggregate(options: &ProjdocOptions) -> Result<Vec<DirSection>, ProjdocError> {
    let listings = walk(options)?;
    let mut sections = Vec::with_capacity(listings.len());
    for listing in listings {
        let relative_path = display_relative(&listing.relative);
        let dir = options.root.join(&listing.relative);
        let files = listing
            .files
            .into_iter()
            .map(|file_name| ContentRecord {
                relative_dir: relative_path.clone(),
                language: language_for(&file_name).to_string(),
                content: read_file_content(&dir.join(&file_name), options.binary_detection),
                file_name,
            })
            .collect();
        sections.push(DirSection {
            heading_level: heading_level(listing.depth),
            depth: listing.depth,
            relative_path,
            files,
        });
    }
    Ok(sections)
}
