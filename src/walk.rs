//! Directory traversal shared by the tree renderer and the content aggregator.

use crate::error::ProjdocError;
use crate::options::{IgnoreSet, ProjdocOptions};
use ignore::{DirEntry, WalkBuilder};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One visited directory and the files directly inside it.
#[derive(Debug, Clone)]
pub(crate) struct DirListing {
    /// Path relative to the walk root; empty for the root itself.
    pub relative: PathBuf,
    /// Number of components in `relative`.
    pub depth: usize,
    /// Non-ignored file names, sorted.
    pub files: Vec<String>,
}

#[derive(Debug, Default)]
struct Node {
    dirs: Vec<PathBuf>,
    files: Vec<String>,
}

enum Kind {
    Dir,
    File,
    Skip,
}

struct Walker {
    inner: ignore::Walk,
    ignore: IgnoreSet,
    matcher: Option<globset::GlobSet>,
}
impl Walker {
    fn new(options: &ProjdocOptions) -> Result<Self, ProjdocError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let matcher = build_matcher(&options.ignore_patterns)?;
        let ignore = options.ignore.clone();
        {
            let ignore = ignore.clone();
            let matcher = matcher.clone();
            let root = options.root.clone();
            builder.filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                keep(relative, is_dir, &ignore, matcher.as_ref())
            });
        }
        Ok(Self {
            inner: builder.build(),
            ignore,
            matcher,
        })
    }
}

fn build_matcher(patterns: &[String]) -> Result<Option<globset::GlobSet>, ProjdocError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = globset::GlobSetBuilder::new();
    for pattern in patterns {
        let glob = globset::Glob::new(pattern)
            .map_err(|e| ProjdocError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| ProjdocError::InvalidPattern(e.to_string()))
}

fn keep(
    relative: &Path,
    is_dir: bool,
    ignore: &IgnoreSet,
    matcher: Option<&globset::GlobSet>,
) -> bool {
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if is_dir && ignore.ignores_dir(&name) {
        #[cfg(feature = "logging")]
        tracing::trace!(dir = %relative.display(), "skipping ignored directory");
        return false;
    }
    if !is_dir && ignore.ignores_file(&name) {
        return false;
    }
    !matcher.is_some_and(|m| m.is_match(relative))
}

fn classify(entry: &DirEntry) -> Kind {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => Kind::Dir,
        // Unfollowed links to directories are neither walked nor listed.
        Some(ft) if ft.is_symlink() && entry.path().is_dir() => Kind::Skip,
        Some(_) => Kind::File,
        None => Kind::Skip,
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

// An entry that exists but cannot be stat'ed through, like a dangling link
// when following links. Directories that fail to read are not leaves.
fn unreadable_leaf(err: &ignore::Error) -> Option<&Path> {
    let path = error_path(err)?;
    (fs::symlink_metadata(path).is_ok() && !path.is_dir()).then_some(path)
}

fn check_root(root: &Path) -> Result<(), ProjdocError> {
    let metadata = fs::metadata(root).map_err(|e| ProjdocError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ProjdocError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(())
}

/// Walks the tree below `options.root` and returns its directories top-down:
/// each directory comes before its subdirectories, siblings in name order.
pub(crate) fn walk(options: &ProjdocOptions) -> Result<Vec<DirListing>, ProjdocError> {
    check_root(&options.root)?;
    #[cfg(feature = "logging")]
    tracing::debug!(root = %options.root.display(), "walking directory tree");
    let Walker {
        inner,
        ignore,
        matcher,
    } = Walker::new(options)?;
    let mut nodes: BTreeMap<PathBuf, Node> = BTreeMap::new();
    nodes.insert(PathBuf::new(), Node::default());
    for result in inner {
        let (path, kind) = match result {
            Ok(entry) if entry.depth() == 0 => continue,
            Ok(entry) => {
                let kind = classify(&entry);
                (entry.into_path(), kind)
            }
            Err(err) => match unreadable_leaf(&err) {
                Some(path) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!(path = %path.display(), error = %err, "listing unreadable entry as a file");
                    let relative = path.strip_prefix(&options.root).unwrap_or(path);
                    if !keep(relative, false, &ignore, matcher.as_ref()) {
                        continue;
                    }
                    (path.to_path_buf(), Kind::File)
                }
                None => return Err(ProjdocError::Walk(err.to_string())),
            },
        };
        let relative = path
            .strip_prefix(&options.root)
            .unwrap_or(path.as_path())
            .to_path_buf();
        let parent = relative.parent().map(Path::to_path_buf).unwrap_or_default();
        match kind {
            Kind::Dir => {
                if let Some(node) = nodes.get_mut(&parent) {
                    node.dirs.push(relative.clone());
                }
                nodes.insert(relative, Node::default());
            }
            Kind::File => {
                let name = relative
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if let Some(node) = nodes.get_mut(&parent) {
                    node.files.push(name);
                }
            }
            Kind::Skip => {}
        }
    }
    let mut listings = Vec::with_capacity(nodes.len());
    flatten(&mut nodes, PathBuf::new(), 0, &mut listings);
    Ok(listings)
}

fn flatten(
    nodes: &mut BTreeMap<PathBuf, Node>,
    relative: PathBuf,
    depth: usize,
    out: &mut Vec<DirListing>,
) {
    let Some(mut node) = nodes.remove(&relative) else {
        return;
    };
    node.files.sort();
    node.dirs.sort();
    out.push(DirListing {
        relative,
        depth,
        files: node.files,
    });
    for dir in node.dirs {
        flatten(nodes, dir, depth + 1, out);
    }
}
