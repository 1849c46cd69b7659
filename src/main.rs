//! JSON Log Viewer - Entry Point

use clap::Parser;
use jlv::model::AppError;
use jlv::view::TuiError;
use std::path::PathBuf;
use tracing::info;

/// JSON Log Viewer - TUI for browsing JSON-lines log files
#[derive(Parser, Debug)]
#[command(name = "jlv")]
#[command(version)]
#[command(about = "TUI application for viewing JSON-lines log files")]
pub struct Args {
    /// Path to JSONL log file
    pub file: PathBuf,

    /// Only show entries with this level (case-insensitive)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Sort by field; prefix with '-' for descending
    #[arg(short, long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Path to the log file jlv writes its own diagnostics to
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = jlv::config::load_config_with_precedence(args.config.clone())?;
        let merged = jlv::config::merge_config(config_file);
        let with_env = jlv::config::apply_env_overrides(merged);
        jlv::config::apply_cli_overrides(with_env, args.level, args.sort, args.log)
    };

    jlv::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let entries = jlv::source::load(&args.file, config.level.as_deref(), config.sort.as_deref())?;

    let source_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    jlv::view::run_app(entries, &config, &source_name).map_err(|e| match e {
        TuiError::Io(err) => AppError::Terminal(err),
    })
}
