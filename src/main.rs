use anyhow::Context;
use autocomplete::api::{AppState, create_router};
use autocomplete::clock::system_clock;
use autocomplete::config::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "autocomplete", about = "Movie lookup front-end for the document store")]
struct Cli {
    /// Address to listen on, overrides BIND_ADDR
    #[arg(long)]
    bind: Option<String>,

    /// Document store base URL, overrides DB_ADDR / LOAD_BALANCER_IP
    #[arg(long)]
    db_addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Bridge log crate -> tracing (reqwest/hyper still log through it)
    tracing_log::LogTracer::init()?;

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(db_addr) = cli.db_addr {
        config.db_addr = db_addr.trim_end_matches('/').to_string();
    }

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let app = create_router(AppState::new(&config, http, system_clock()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        db_addr = %config.db_addr,
        movie_index = %config.movie_index,
        "autocomplete listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving until the process is killed.
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
