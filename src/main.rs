use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vaastavik::analyzer::{read_input, Analyzer};
use vaastavik::export::{self, ExportFormat, Report};
use vaastavik::ui::{run_app, App, Tui};

#[derive(Parser)]
#[command(name = "vaastavik")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Terminal UI news credibility checker", long_about = None)]
struct Cli {
    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive checker (default)
    Tui {
        /// Pre-fill the article text
        #[arg(short, long)]
        text: Option<String>,

        /// Seed the scoring generator for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Analyze an article from a file or stdin and print a report
    Check {
        /// Article file ('-' or omitted reads stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(short = 'o', long, default_value = "text")]
        format: ExportFormat,

        /// Seed the scoring generator for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show version information
    Version,
}

/// Initialize tracing.
///
/// The TUI owns the terminal, so without a log file nothing is installed
/// in interactive mode. Non-interactive commands log to stderr.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vaastavik=info".into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else if !interactive {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }
    Ok(())
}

fn analyzer_for(seed: Option<u64>) -> Analyzer {
    match seed {
        Some(seed) => Analyzer::seeded(seed),
        None => Analyzer::new(),
    }
}

fn run_tui(text: Option<String>, seed: Option<u64>) -> Result<()> {
    let mut app = App::new(analyzer_for(seed));
    if let Some(text) = text {
        app.set_text(text);
    }

    tracing::info!("starting interactive checker");
    let mut tui = Tui::new().context("Failed to initialize terminal")?;
    run_app(tui.terminal_mut(), &mut app)?;
    tui.restore().context("Failed to restore terminal")?;
    Ok(())
}

/// Analyze `text` and render the report.
///
/// Blank text is an error; it is the command-line form of the disabled
/// analyze control.
fn check_text(text: &str, format: ExportFormat, seed: Option<u64>) -> Result<String> {
    let Some(result) = analyzer_for(seed).analyze(text) else {
        bail!("nothing to analyze: input is empty");
    };

    let report = Report::new(result, text);
    export::export_to_string(format, &report).context("Failed to render report")
}

fn run_check(file: Option<&Path>, format: ExportFormat, seed: Option<u64>) -> Result<()> {
    let text = read_input(file)?;
    let output = check_text(&text, format, seed)?;
    print!("{}", output);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    init_tracing(cli.log_file.as_deref(), interactive)?;

    match cli.command {
        Some(Commands::Tui { text, seed }) => run_tui(text, seed),
        Some(Commands::Check { file, format, seed }) => run_check(file.as_deref(), format, seed),
        Some(Commands::Version) => {
            println!("vaastavik v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => run_tui(None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_rejects_blank_input() {
        for text in ["", "   ", "\n\t \r\n"] {
            let err = check_text(text, ExportFormat::Text, Some(1)).unwrap_err();
            assert_eq!(err.to_string(), "nothing to analyze: input is empty");
        }
    }

    #[test]
    fn test_check_text_renders_report() {
        let output = check_text("Breaking: scientists confirm...", ExportFormat::Json, Some(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["verdict"] == "reliable" || value["verdict"] == "suspicious");
        assert_eq!(value["flags"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_check_text_seed_is_reproducible() {
        let a = check_text("news", ExportFormat::Markdown, Some(9)).unwrap();
        let b = check_text("news", ExportFormat::Markdown, Some(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cli_parses_check_format() {
        let cli = Cli::try_parse_from(["vaastavik", "check", "-f", "-", "-o", "md"]).unwrap();
        match cli.command {
            Some(Commands::Check { file, format, .. }) => {
                assert_eq!(file.as_deref(), Some(Path::new("-")));
                assert_eq!(format, ExportFormat::Markdown);
            }
            _ => panic!("expected check command"),
        }
    }
}
