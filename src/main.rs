//! NexEvent terminal client.
//!
//! # Usage
//!
//! ```bash
//! # Against the default development server
//! nexevent
//!
//! # Against another API, keeping tokens in a custom location
//! nexevent --api-url http://localhost:8000 --store ~/.nexevent/kv.db
//! ```

mod cli;

use anyhow::Context;
use app_core::{AuthService, EventService};
use app_state::{SessionConfig, SessionController};
use app_ui::App;
use clap::Parser;
use event_client::http::DEFAULT_BASE_URL;
use event_client::{ApiClientConfig, NexEventApi};
use storage::{KvConfig, KvStore, TokenStore};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// NexEvent event discovery client
#[derive(Parser, Debug)]
#[command(name = "nexevent")]
#[command(about = "Browse and register for NexEvent events")]
#[command(version)]
struct Args {
    /// Base URL of the NexEvent API
    #[arg(long, env = "NEXEVENT_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Path of the local key-value store holding session tokens
    #[arg(long, env = "NEXEVENT_STORE", default_value = "nexevent_kv.db")]
    store: String,

    /// Accept the development bypass credentials without contacting the server
    #[arg(long)]
    dev_bypass: bool,

    /// Resume the previous session from stored tokens at startup
    #[arg(long)]
    restore_session: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("NexEvent starting against {}", args.api_url);
    if args.dev_bypass {
        tracing::warn!("Development bypass login is enabled");
    }

    let kv = KvStore::new(KvConfig::new(&args.store))
        .with_context(|| format!("opening store at {}", args.store))?;
    let api = NexEventApi::new(ApiClientConfig::new(&args.api_url)).context("building HTTP client")?;

    let config = SessionConfig::new()
        .dev_bypass(args.dev_bypass)
        .restore_session(args.restore_session);
    let session = SessionController::new(AuthService::new(api.clone(), TokenStore::new(kv)), config);

    let mut app = App::new(session, EventService::new(api), cli::Console::stdin());
    cli::run(&mut app).await?;

    tracing::info!("NexEvent exiting");
    Ok(())
}
