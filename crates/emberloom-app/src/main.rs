mod app_state;
mod boot;
mod cli;

use tracing_subscriber::EnvFilter;
use url::Url;
use winit::event_loop::EventLoop;

use emberloom_common::{endpoint, EndpointError};
use emberloom_config::schema::{EndpointConfig, LoggingConfig};
use emberloom_config::EmberloomConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = emberloom_platform::write_crash_report(info);

        eprintln!("\n--- Emberloom crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

/// Filter directive from `--log-level`, falling back to the config level.
/// A bare level applies to the workspace crates only.
fn log_directive(cli_level: Option<&str>, config: &LoggingConfig) -> String {
    match cli_level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("emberloom={level}"),
        None => config.level.directive().to_string(),
    }
}

/// `RUST_LOG` wins over every other source.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("emberloom=info"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The URL to load: `--url` when given, else the configured endpoint.
fn resolve_endpoint(cli_url: Option<&str>, config: &EndpointConfig) -> Result<Url, EndpointError> {
    let raw = cli_url.unwrap_or(&config.url);
    if config.require_https {
        endpoint::validate_endpoint(raw)
    } else {
        endpoint::parse_endpoint(raw)
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    let loaded = emberloom_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    init_logging(&log_directive(args.log_level.as_deref(), &level));

    tracing::info!("Emberloom v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        EmberloomConfig::default()
    });

    if let Err(e) = emberloom_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let endpoint = match resolve_endpoint(args.url.as_deref(), &config.endpoint) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Invalid game endpoint: {e}");
            eprintln!("emberloom: {e}");
            std::process::exit(2);
        }
    };
    tracing::info!(url = %endpoint, "Game endpoint resolved");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::EmberloomApp::new(config, endpoint, args.no_splash);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
