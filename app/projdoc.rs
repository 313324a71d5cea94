//! Command-line interface for projdoc.
//!
//! Walks a project directory and writes its tree and file contents to a single
//! Markdown (or JSON) file.

use clap::{Parser, ValueEnum};
use projdoc::output;
use projdoc::{BinaryDetection, FenceStyle, IgnoreSet, ProjdocBuilder, ProjdocOptions, projdoc};
use std::path::PathBuf;
use std::process::exit;

/// projdoc — generate project documentation
#[derive(Parser)]
#[command(name = "projdoc", version, about, long_about = None)]
struct Cli {
    /// Path to the project directory
    project_path: PathBuf,

    /// Output file path [default: project_documentation.md, or .json with --format json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Additional directory names to ignore
    #[arg(short = 'd', long, num_args = 0..)]
    ignore_dirs: Vec<String>,

    /// Additional file names to ignore
    #[arg(short = 'f', long, num_args = 0..)]
    ignore_files: Vec<String>,

    /// Glob patterns matched against root-relative paths (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Also honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "none", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Lengthen code fences so file contents containing ``` stay inside their block
    #[arg(long)]
    safe_fences: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Indent JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => output::OutputFormat::Markdown,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (ProjdocOptions, PathBuf, Format, bool) {
        let ignore = IgnoreSet::cli_defaults()
            .extend_dirs(self.ignore_dirs)
            .extend_files(self.ignore_files);
        let fence = if self.safe_fences {
            FenceStyle::Adaptive
        } else {
            FenceStyle::Fixed
        };
        let options = ProjdocBuilder::new(self.project_path)
            .ignore(ignore)
            .ignore_patterns(self.ignore_patterns)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .binary_detection(self.binary_detection)
            .fence(fence)
            .build();
        let output_path = self.output.unwrap_or_else(|| {
            PathBuf::from(output::OutputFormat::from(self.format).default_file_name())
        });
        (options, output_path, self.format, self.pretty)
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let filter = if verbose {
        EnvFilter::new("projdoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let (options, output_path, format, pretty) = cli.into_options();

    let doc = match projdoc(options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    if let Err(e) = output::write_document_to_file(&doc, format.into(), &output_path, pretty) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Documentation saved to {}", output_path.display());
}
