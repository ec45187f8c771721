use clap::{Parser, Subcommand};
use figcss_codegen::{render_download_page, Output};
use figcss_tokens::{Settings, Snapshot};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "figcss")]
#[command(about = "figcss — design tokens to CSS custom properties and utility classes")]
#[command(version)]
struct Cli {
    /// Log lookups and generation steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the CSS files from a document snapshot
    Build {
        /// Snapshot JSON exported from the design tool
        path: PathBuf,

        /// Directory to write into (defaults to the snapshot's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Settings TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write index.html with download links
        #[arg(long)]
        html: bool,

        /// Exit with an error if any warning was produced
        #[arg(long)]
        strict: bool,
    },

    /// Report warnings and planned files without writing anything
    Check {
        /// Snapshot JSON exported from the design tool
        path: PathBuf,

        /// Settings TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            out_dir,
            config,
            html,
            strict,
        } => cmd_build(&path, out_dir.as_deref(), config.as_deref(), html, strict),
        Command::Check { path, config } => cmd_check(&path, config.as_deref()),
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "figcss=debug"
    } else {
        "figcss=info"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_settings(config: Option<&Path>) -> Settings {
    let Some(path) = config else {
        return Settings::default();
    };
    match Settings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn load_snapshot(path: &Path) -> Snapshot {
    if !path.exists() {
        eprintln!("Error: file not found: {}", path.display());
        std::process::exit(1);
    }
    match Snapshot::load(path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(path: &Path, config: Option<&Path>) -> Output {
    let settings = load_settings(config);
    let snapshot = load_snapshot(path);
    figcss_codegen::generate(&snapshot, &settings)
}

fn report_warnings(output: &Output) {
    for warning in &output.warnings {
        tracing::warn!("{warning}");
    }
}

fn output_dir(path: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    }
}

fn write_file(path: &Path, contents: &str) {
    if let Err(e) = std::fs::write(path, contents) {
        eprintln!("Error writing {}: {e}", path.display());
        std::process::exit(1);
    }
    tracing::info!("Built: {}", path.display());
}

fn cmd_build(path: &Path, out_dir: Option<&Path>, config: Option<&Path>, html: bool, strict: bool) {
    let output = run(path, config);
    report_warnings(&output);

    let dir = output_dir(path, out_dir);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error creating {}: {e}", dir.display());
        std::process::exit(1);
    }

    for file in &output.files {
        write_file(&dir.join(&file.file_name), &file.css);
    }

    if html {
        let page = render_download_page(&output);
        write_file(&dir.join("index.html"), &page_document(&page.html));
    }

    if strict && !output.warnings.is_empty() {
        eprintln!("Error: {} warning(s) with --strict", output.warnings.len());
        std::process::exit(1);
    }
}

fn cmd_check(path: &Path, config: Option<&Path>) {
    let output = run(path, config);
    report_warnings(&output);

    let names: Vec<&str> = output.files.iter().map(|f| f.file_name.as_str()).collect();
    eprintln!("OK: {} ({})", path.display(), names.join(", "));
}

/// Wrap the download page in a standalone HTML document.
fn page_document(body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>figcss</title>\n</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}
