mod app;
mod config;
mod i18n;
mod input;
mod mapper;
mod proxy;
mod report;
mod request;
mod server;
mod stats;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use app::{AppEvent, AppState, Phase};
use config::Config;
use i18n::ResultLanguage;
use input::{AnalyzeInput, FilePayload};

#[derive(Parser)]
#[command(name = "scamwatch", version, about = "Analyze audio, PDF, or text for scams via an AI analysis backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze audio/PDF files or raw text and print a localized risk report
    Analyze {
        /// Audio (.mp3/.wav) or PDF files to analyze
        files: Vec<PathBuf>,
        /// Raw text to analyze instead of files
        #[arg(long, conflicts_with = "files")]
        text: Option<String>,
        /// Result language: auto, English, Hindi, or Telugu
        #[arg(long)]
        language: Option<String>,
        /// Backend base URL (overrides config and environment)
        #[arg(long)]
        backend: Option<String>,
    },
    /// Run the /analyze proxy endpoint in front of the analysis backend
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8787")]
        bind: String,
        /// Backend base URL (overrides config and environment)
        #[arg(long)]
        backend: Option<String>,
    },
    /// Show analysis totals and history
    Stats,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { files, text, language, backend } => {
            run_analyze(files, text, language, backend).await
        }
        Command::Serve { bind, backend } => run_serve(bind, backend).await,
        Command::Stats => run_stats(),
    }
}

fn load_config(backend: Option<String>) -> Config {
    let mut config = Config::load();
    if let Some(url) = backend {
        config.backend_url = url;
    }
    config
}

/// Collect submissions from the CLI arguments. Unsupported files are
/// skipped without an error; unreadable ones abort.
async fn gather_inputs(
    files: Vec<PathBuf>,
    text: Option<String>,
) -> Result<Vec<AnalyzeInput>, ExitCode> {
    let mut inputs = Vec::new();

    if let Some(text) = text {
        if let Some(input) = AnalyzeInput::text(&text) {
            inputs.push(input);
        }
    }

    for path in files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let mime = input::guess_mime(&name).to_string();
        if !input::is_acceptable(&name, &mime) {
            log::debug!("Skipping unsupported file {}", path.display());
            continue;
        }
        match tokio::fs::read(&path).await {
            Ok(bytes) => inputs.push(AnalyzeInput::File(FilePayload { name, mime, bytes })),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return Err(ExitCode::FAILURE);
            }
        }
    }

    Ok(inputs)
}

async fn run_analyze(
    files: Vec<PathBuf>,
    text: Option<String>,
    language: Option<String>,
    backend: Option<String>,
) -> ExitCode {
    let config = load_config(backend);

    let lang_value = language.unwrap_or_else(|| config.response_language.clone());
    let Some(lang) = ResultLanguage::parse(&lang_value) else {
        eprintln!("Unknown result language: {lang_value}");
        return ExitCode::FAILURE;
    };

    let inputs = match gather_inputs(files, text).await {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };
    if inputs.is_empty() {
        eprintln!("Nothing to analyze: pass audio/PDF files or --text");
        return ExitCode::FAILURE;
    }

    let (tx, rx) = async_channel::unbounded::<AppEvent>();
    let mut state = AppState::new(tx.clone(), &config, lang);
    let mut stats = stats::Stats::load();
    let mut failed = false;

    for input in inputs {
        let source = input.source_label();
        if tx.send(AppEvent::Submit(input)).await.is_err() {
            break;
        }

        // Drain events until this submission settles.
        while let Ok(event) = rx.recv().await {
            app::handle_event(&mut state, event);
            match state.phase {
                Phase::Results => break,
                Phase::Idle if state.error.is_some() => break,
                _ => {}
            }
        }

        if state.phase == Phase::Results {
            if let (Some(result), Some(explanation)) =
                (state.result.as_ref(), state.explanation.as_ref())
            {
                println!("{}", report::render(result, explanation, &state.highlights, lang));
                stats.record_analysis(&source, result);
            }
        } else {
            if let Some(error) = state.error.as_deref() {
                eprintln!("{source}: {error}");
            }
            failed = true;
        }

        app::handle_event(&mut state, AppEvent::Reset);
    }

    if let Err(e) = stats.save() {
        log::warn!("Failed to save stats: {e}");
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run_serve(bind: String, backend: Option<String>) -> ExitCode {
    let config = load_config(backend);
    log::info!("Forwarding to backend at {}", config.backend_url);
    let state = Arc::new(server::ServerState {
        client: reqwest::Client::new(),
        backend_url: config.backend_url,
    });
    match server::serve(&bind, state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_stats() -> ExitCode {
    let stats = stats::Stats::load();
    println!("Analyses: {}", stats.total_analyses);
    println!("Scams flagged: {}", stats.scams_flagged);
    for record in &stats.history {
        println!(
            "{}  {}  risk={}  scam={}",
            record.timestamp,
            record.source,
            record.risk_level,
            if record.scam_detected { "yes" } else { "no" }
        );
    }
    ExitCode::SUCCESS
}
