use crate::frameworks::config::{Config, ConfigError};
use crate::interface_adapters::clients::TwitchClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::interface_adapters::views::AskamaRenderer;
use crate::use_cases::{CheckLiveUseCase, CredentialCache};
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let twitch = Arc::new(TwitchClient::new(
        config.client_id.clone(),
        config.client_secret.clone(),
        config.auth_url.clone(),
        config.api_url.clone(),
    ));
    tracing::debug!(
        auth_url = %twitch.auth_url,
        api_url = %twitch.api_url,
        channel = %config.channel,
        "twitch client configured."
    );

    let credentials = Arc::new(CredentialCache::new(twitch.clone(), Arc::new(SystemClock)));
    let status = CheckLiveUseCase {
        api: twitch,
        credentials,
        channel: config.channel.clone(),
    };

    Arc::new(AppState {
        status: Arc::new(status),
        renderer: Arc::new(AskamaRenderer),
    })
}

pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

// Configuration is resolved before anything is bound; a missing variable
// returns here without opening a socket.
pub async fn run_with_lookup<F>(lookup: F) -> Result<(), StartupError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup).inspect_err(|e| {
        let ConfigError::Missing(vars) = e;
        for var in vars {
            tracing::error!(variable = var, "missing required environment variable.");
        }
    })?;

    let state = build_state(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| {
            tracing::error!(%addr, error = %source, "failed to bind");
            StartupError::Bind { addr, source }
        })?;

    serve(listener, state).await.map_err(StartupError::Serve)
}

pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run_with_lookup(|key| std::env::var(key).ok()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
