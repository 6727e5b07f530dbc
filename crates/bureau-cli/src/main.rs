mod display;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use bureau_ai::config::{DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use bureau_ai::{Refresher, RefresherConfig};
use bureau_core::departments::{self, Department};
use bureau_core::{ContentDocument, today};
use bureau_store::{ContentStore, JsonFileStore};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bureau", version, about = "Department bulletin portal")]
struct Cli {
    /// Path to the content document.
    #[arg(long, global = true, env = "BUREAU_CONTENT", default_value = "content.json")]
    content: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate every department's bulletins and rewrite the content document.
    Refresh(RefreshArgs),
    /// Show one department's bulletins.
    View {
        /// Department name or list number. Prompts when omitted.
        department: Option<String>,
    },
}

#[derive(Args)]
struct RefreshArgs {
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "ANTHROPIC_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "BUREAU_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, env = "BUREAU_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Per-request timeout in seconds.
    #[arg(long, env = "BUREAU_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

impl RefreshArgs {
    fn into_config(self) -> RefresherConfig {
        RefresherConfig {
            api_key: self.api_key,
            api_url: self.api_url,
            model: self.model,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Refresh(args) => {
            init_tracing("info");
            refresh(&cli.content, args.into_config()).await
        }
        Command::View { department } => {
            init_tracing("warn");
            view(&cli.content, department.as_deref())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or `default` when unset.
fn init_tracing(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn refresh(path: &Path, config: RefresherConfig) -> anyhow::Result<()> {
    info!(model = %config.model, "bureau v{}", env!("CARGO_PKG_VERSION"));
    let refresher = Refresher::from_config(&config, JsonFileStore::new(path))
        .context("refresh aborted before any request was made")?;
    let report = refresher
        .run()
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    if !report.fallbacks.is_empty() {
        warn!(departments = ?report.fallbacks, "fallback bulletins used");
    }
    info!(
        "Content updated successfully on {} ({}/{} generated)",
        report.date,
        report.generated,
        report.total()
    );
    Ok(())
}

fn view(path: &Path, selection: Option<&str>) -> anyhow::Result<()> {
    let department = match selection {
        Some(s) => resolve(s)?,
        None => prompt_for_department()?,
    };

    let store = JsonFileStore::new(path);
    ensure_seeded(&store);
    let doc = store.load();
    print!("{}", display::render_page(&doc, department.name));
    Ok(())
}

/// Write the seed document on first run. A failure only means the viewer
/// shows placeholders, so it is logged rather than returned.
fn ensure_seeded(store: &JsonFileStore) {
    if store.is_initialized() {
        return;
    }
    match store.save(&ContentDocument::seeded(today())) {
        Ok(()) => info!(path = %store.path().display(), "created default content document"),
        Err(e) => warn!(path = %store.path().display(), error = %e, "could not create default content document"),
    }
}

fn resolve(selection: &str) -> anyhow::Result<&'static Department> {
    departments::resolve(selection).ok_or_else(|| anyhow!("unknown department: {selection}"))
}

fn prompt_for_department() -> anyhow::Result<&'static Department> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(display::render_selection().as_bytes())?;
    stdout.write_all(b"> ")?;
    stdout.flush()?;
    drop(stdout);

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading department selection")?;
    resolve(&line)
}
