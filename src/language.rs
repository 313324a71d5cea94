use std::path::Path;

/// Returns the code-fence tag for a file name, or `""` when its extension is
/// not known. Extensions are matched exactly and case-sensitively, so `x.PY`
/// gets no tag.
pub fn language_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    language_from_extension(ext)
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "py" => "python", "js" => "javascript", "ts" => "typescript",
        "jsx" => "jsx", "tsx" => "tsx", "css" => "css", "scss" => "scss",
        "html" | "ejs" => "html", "json" => "json", "md" => "markdown",
        "sql" => "sql", "yaml" | "yml" => "yaml", "xml" => "xml",
        _ => "",
    }
}

/// Every extension with a tag, including the leading dot.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".jsx", ".tsx", ".css", ".scss", ".html", ".json", ".md", ".sql",
    ".yaml", ".yml", ".xml", ".ejs",
];
