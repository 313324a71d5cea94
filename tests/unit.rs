use projdoc::output::{OutputFormat, fence_for};
use projdoc::{
    BinaryDetection, FenceStyle, FileContent, IgnoreSet, KNOWN_EXTENSIONS, TreeLine,
    heading_level, language_for, read_file_content,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_heading_levels() {
    assert_eq!(heading_level(0), 1);
    assert_eq!(heading_level(1), 3);
    assert_eq!(heading_level(2), 4);
    assert_eq!(heading_level(3), 5);
    assert_eq!(heading_level(4), 6);
    assert_eq!(heading_level(9), 6);
    assert_eq!(heading_level(usize::MAX), 6);
}
#[test]
fn test_every_known_extension_is_tagged() {
    let table = [
        (".py", "python"),
        (".js", "javascript"),
        (".ts", "typescript"),
        (".jsx", "jsx"),
        (".tsx", "tsx"),
        (".css", "css"),
        (".scss", "scss"),
        (".html", "html"),
        (".json", "json"),
        (".md", "markdown"),
        (".sql", "sql"),
        (".yaml", "yaml"),
        (".yml", "yaml"),
        (".xml", "xml"),
        (".ejs", "html"),
    ];
    assert_eq!(table.len(), KNOWN_EXTENSIONS.len());
    for (ext, tag) in table {
        assert!(KNOWN_EXTENSIONS.contains(&ext), "{} missing from the table", ext);
        assert_eq!(language_for(&format!("x{}", ext)), tag, "wrong tag for {}", ext);
    }
}
#[test]
fn test_unknown_extensions_are_untagged() {
    assert_eq!(language_for("x.PY"), "");
    assert_eq!(language_for("main.rs"), "");
    assert_eq!(language_for("Makefile"), "");
    assert_eq!(language_for(".bashrc"), "");
    assert_eq!(language_for("archive.tar.gz"), "");
}
#[test]
fn test_read_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "héllo\nworld").unwrap();
    let content = read_file_content(&path, BinaryDetection::None);
    assert_eq!(content, FileContent::Text("héllo\nworld".into()));
}
#[test]
fn test_read_latin1_fallback() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.txt");
    fs::write(&path, [b'c', b'a', b'f', 0xE9, b' ', 0xFF]).unwrap();
    let content = read_file_content(&path, BinaryDetection::None);
    assert!(!content.is_placeholder());
    assert_eq!(content.as_str(), "café ÿ");
}
#[test]
fn test_read_normalizes_line_endings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("win.txt");
    fs::write(&path, b"one\r\ntwo\rthree\n").unwrap();
    let content = read_file_content(&path, BinaryDetection::None);
    assert_eq!(content.as_str(), "one\ntwo\nthree\n");
    let legacy = dir.path().join("legacy.txt");
    fs::write(&legacy, [0xE9, b'\r', b'\n']).unwrap();
    assert_eq!(read_file_content(&legacy, BinaryDetection::None).as_str(), "é\n");
}
#[test]
fn test_read_error_placeholder() {
    let dir = tempdir().unwrap();
    let content = read_file_content(&dir.path().join("missing.txt"), BinaryDetection::None);
    assert!(content.is_placeholder());
    assert!(content.as_str().starts_with("<<Error reading file: "));
    assert!(content.as_str().ends_with(">>"));
}
#[test]
fn test_binary_detection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.dat");
    fs::write(&path, vec![0, 1, 2, 3]).unwrap();
    let simple = read_file_content(&path, BinaryDetection::Simple);
    assert_eq!(
        simple,
        FileContent::Placeholder("<<Binary file or encoding not supported>>".into())
    );
    assert!(read_file_content(&path, BinaryDetection::Accurate).is_placeholder());
    let none = read_file_content(&path, BinaryDetection::None);
    assert_eq!(none.as_str(), "\u{0}\u{1}\u{2}\u{3}");
}
#[test]
fn test_ignore_set_defaults() {
    let ignore = IgnoreSet::default();
    for dir in [".git", "node_modules", "__pycache__", "dist", "build", "venv"] {
        assert!(ignore.ignores_dir(dir), "{} should be ignored", dir);
    }
    assert!(ignore.ignores_file(".DS_Store"));
    assert!(ignore.ignores_file(".env"));
    assert!(!ignore.ignores_dir("images"));
    assert!(!ignore.ignores_file("README.md"));
    assert!(!ignore.ignores_dir(".DS_Store"));
}
#[test]
fn test_ignore_set_cli_defaults() {
    let ignore = IgnoreSet::cli_defaults().extend_dirs(["target"]).extend_files(["Cargo.lock"]);
    assert!(ignore.ignores_dir("images"));
    assert!(ignore.ignores_dir(".git"));
    assert!(ignore.ignores_dir("target"));
    assert!(ignore.ignores_file("README.md"));
    assert!(ignore.ignores_file("package-lock.json"));
    assert!(ignore.ignores_file(".env"));
    assert!(ignore.ignores_file("Cargo.lock"));
    assert!(!ignore.ignores_file("readme.md"));
}
#[test]
fn test_ignore_set_listing() {
    let ignore = IgnoreSet::default();
    assert_eq!(
        ignore.dirs().collect::<Vec<_>>(),
        [".git", "__pycache__", "build", "dist", "node_modules", "venv"]
    );
    assert_eq!(ignore.files().collect::<Vec<_>>(), [".DS_Store", ".env"]);
    let empty = IgnoreSet::empty();
    assert_eq!(empty.dirs().count(), 0);
    assert_eq!(empty.files().count(), 0);
    assert!(!empty.ignores_dir(".git"));
}
#[test]
fn test_default_output_names() {
    assert_eq!(OutputFormat::Markdown.default_file_name(), "project_documentation.md");
    assert_eq!(OutputFormat::Json.default_file_name(), "project_documentation.json");
}
#[test]
fn test_tree_line_glyphs() {
    let file_at_root = TreeLine {
        depth: 0,
        name: "a.py".into(),
        is_dir: false,
    };
    let dir = TreeLine {
        depth: 2,
        name: "inner".into(),
        is_dir: true,
    };
    let nested_file = TreeLine {
        depth: 2,
        name: "b.md".into(),
        is_dir: false,
    };
    assert_eq!(file_at_root.to_string(), "├── a.py");
    assert_eq!(dir.to_string(), "│   ├── inner/");
    assert_eq!(nested_file.to_string(), "│   │   ├── b.md");
}
#[test]
fn test_fences() {
    assert_eq!(fence_for("a ```b``` c", FenceStyle::Fixed), "```");
    assert_eq!(fence_for("plain", FenceStyle::Adaptive), "```");
    assert_eq!(fence_for("a ```b``` c", FenceStyle::Adaptive), "````");
    assert_eq!(fence_for("`````", FenceStyle::Adaptive), "``````");
}
