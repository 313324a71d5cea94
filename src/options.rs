use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

const DEFAULT_IGNORE_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", "dist", "build", "venv"];
const DEFAULT_IGNORE_FILES: &[&str] = &[".DS_Store", ".env"];
const CLI_EXTRA_IGNORE_DIRS: &[&str] = &["images"];
const CLI_EXTRA_IGNORE_FILES: &[&str] = &["README.md", "package-lock.json"];

/// Directory and file names excluded from both the tree and the file contents.
///
/// Matching is by exact entry name, never by path or glob, so a `dist` folder is
/// skipped wherever it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreSet {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}
impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_IGNORE_DIRS.iter().copied(),
            DEFAULT_IGNORE_FILES.iter().copied(),
        )
    }
}
impl IgnoreSet {
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
    /// An ignore set that excludes nothing.
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }
    /// The defaults used by the command-line tool: the library defaults plus
    /// `images/`, `README.md` and `package-lock.json`.
    pub fn cli_defaults() -> Self {
        Self::default()
            .extend_dirs(CLI_EXTRA_IGNORE_DIRS.iter().copied())
            .extend_files(CLI_EXTRA_IGNORE_FILES.iter().copied())
    }
    pub fn extend_dirs<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.dirs.extend(names.into_iter().map(Into::into));
        self
    }
    pub fn extend_files<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.files.extend(names.into_iter().map(Into::into));
        self
    }
    pub fn ignores_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }
    pub fn ignores_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }
    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}

/// How code fences around file contents are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FenceStyle {
    /// Always three backticks, even if the content contains a backtick run itself.
    Fixed,
    /// One backtick longer than the longest backtick run inside the block.
    Adaptive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjdocOptions {
    pub root: PathBuf,
    pub ignore: IgnoreSet,
    pub ignore_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub binary_detection: BinaryDetection,
    pub fence: FenceStyle,
}
impl Default for ProjdocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore: IgnoreSet::default(),
            ignore_patterns: Vec::new(),
            respect_gitignore: false,
            follow_links: false,
            binary_detection: BinaryDetection::None,
            fence: FenceStyle::Fixed,
        }
    }
}
#[derive(Debug, Default)]
pub struct ProjdocBuilder {
    options: ProjdocOptions,
}
impl ProjdocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ProjdocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore(mut self, ignore: IgnoreSet) -> Self {
        self.options.ignore = ignore;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn fence(mut self, style: FenceStyle) -> Self {
        self.options.fence = style;
        self
    }
    pub fn build(self) -> ProjdocOptions {
        self.options
    }
}
