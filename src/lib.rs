//! # Projdoc
//!
//! `projdoc` walks a project directory and produces one Markdown document: a tree
//! diagram of the files and folders, followed by the full contents of every file,
//! each in a code block tagged with its language.
//!
//! Directories and files are skipped by exact name through an [`IgnoreSet`].
//! Files that are not valid UTF-8 are decoded as Latin-1, and files that cannot be
//! read at all show up as a placeholder instead of stopping the run.
//!
//! # Features
//!
//! - `logging` (default): Emits debug and trace events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use projdoc::{IgnoreSet, ProjdocBuilder, output, projdoc};
//!
//! let options = ProjdocBuilder::new(".")
//!     .ignore(IgnoreSet::default().extend_dirs(["target"]))
//!     .build();
//!
//! let doc = projdoc(options).expect("Failed to scan directory");
//! output::write_document_to_file(&doc, output::OutputFormat::Markdown, "docs.md", false)
//!     .expect("Failed to write document");
//! ```

mod content;
mod engine;
mod error;
mod language;
mod options;
pub mod output;
mod tree;
mod walk;

pub use content::{
    ContentRecord, DirSection, FileContent, MAX_HEADING_LEVEL, aggregate, heading_level,
    read_file_content,
};
pub use engine::{Document, generate_markdown, projdoc};
pub use error::ProjdocError;
pub use language::{KNOWN_EXTENSIONS, language_for};
pub use options::{BinaryDetection, FenceStyle, IgnoreSet, ProjdocBuilder, ProjdocOptions};
pub use tree::{TreeLine, render_tree, tree_to_string};
