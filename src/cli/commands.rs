use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::client::{BackendClient, DEFAULT_API_URL};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::models::{ModelCatalog, QueryResult, ResultField};
use crate::reveal::{DEFAULT_CHAR_INTERVAL_MS, DEFAULT_STAGGER_MS, RevealTiming};
use crate::theme::ThemeMode;
use crate::tui::{AppOptions, run_interactive};
use crate::utils::{LogTarget, default_log_path, init_logging, normalize_api_url, sanitize_for_terminal};

/// Provider used when neither the flag nor the backend names one
pub const DEFAULT_PROVIDER: &str = "mock";

#[derive(Parser)]
#[command(name = "brainstorm")]
#[command(version)]
#[command(about = "Ask a multi-agent backend and watch its staged answer unfold", long_about = None)]
pub struct Cli {
    /// Base URL of the brainstorming backend
    #[arg(long, global = true, env = "API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Provider to query; without it the catalog's current provider is used
    #[arg(long, global = true)]
    pub provider: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = ThemeMode::Auto)]
    pub theme: ThemeMode,

    /// Maximum results kept for comparison (0 = unbounded)
    #[arg(long, global = true, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Delay between revealed characters
    #[arg(long, global = true, default_value_t = DEFAULT_CHAR_INTERVAL_MS)]
    pub char_interval_ms: u64,

    /// Delay between the start of consecutive sections
    #[arg(long, global = true, default_value_t = DEFAULT_STAGGER_MS)]
    pub stagger_ms: u64,

    /// Log file for the interactive session
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the providers the backend offers
    Models,
    /// Ask one question and print every stage of the answer
    Ask {
        /// The question to send
        question: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let api_url = normalize_api_url(&cli.api_url)?;
    let client = BackendClient::new(api_url);

    match &cli.command {
        Some(Commands::Models) => {
            init_logging(LogTarget::Stderr, "warn")?;
            show_models(&client).await;
        }
        Some(Commands::Ask { question }) => {
            init_logging(LogTarget::Stderr, "warn")?;
            ask(&client, question, cli.provider.as_deref()).await?;
        }
        None => {
            let log_path = match cli.log_file.clone() {
                Some(path) => path,
                None => default_log_path()?,
            };
            init_logging(LogTarget::File(log_path), "info")?;

            let options = AppOptions {
                provider: cli.provider.clone().unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
                theme: cli.theme,
                history_limit: cli.history_limit,
                timing: RevealTiming::from_millis(cli.stagger_ms, cli.char_interval_ms),
            };
            run_interactive(client, options)?;
        }
    }

    Ok(())
}

async fn show_models(client: &BackendClient) {
    let catalog = client.load_catalog_or_default().await;
    print!("{}", format_catalog(&catalog));
}

async fn ask(client: &BackendClient, question: &str, provider: Option<&str>) -> Result<()> {
    let provider = match provider {
        Some(explicit) => explicit.to_string(),
        None => resolve_provider(None, &client.load_catalog_or_default().await),
    };
    debug!(%provider, "one-shot query");
    let result = client
        .submit(question, &provider)
        .await
        .with_context(|| format!("Query to provider '{}' failed", provider))?;
    print!("{}", format_result(&result));
    Ok(())
}

/// An explicit choice wins, then the catalog's current provider, then the default
fn resolve_provider(explicit: Option<&str>, catalog: &ModelCatalog) -> String {
    explicit
        .or(catalog.current.as_deref())
        .unwrap_or(DEFAULT_PROVIDER)
        .to_string()
}

fn format_catalog(catalog: &ModelCatalog) -> String {
    if catalog.available_models.is_empty() {
        return "No providers available\n".to_string();
    }

    let mut out = String::new();
    for provider in &catalog.available_models {
        let marker = if catalog.current.as_deref() == Some(provider.id.as_str()) { "*" } else { " " };
        out.push_str(&format!("{} {:<12} {}", marker, provider.id, provider.name));
        if let Some(description) = &provider.description {
            out.push_str(&format!(" - {}", description));
        }
        out.push('\n');
    }
    out
}

fn format_result(result: &QueryResult) -> String {
    let mut out = String::new();
    for field in ResultField::ALL {
        out.push_str(&format!("== {} ==\n", field.title()));
        out.push_str(&sanitize_for_terminal(result.field(field)));
        out.push_str("\n\n");
    }
    out
}
