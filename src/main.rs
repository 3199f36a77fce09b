//! Countdown Timer - A state-managed HTTP countdown timer
//!
//! This is the main entry point for the countdown-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_timer::{
    api::create_router,
    audio::backend_for,
    config::Config,
    state::AppState,
    tasks::{console_display_task, ticker_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, sound={}, theme={:?}",
          config.host, config.port, !config.mute, config.theme());

    let presets = config.presets();
    info!("Presets: {}", presets.iter()
        .map(|p| format!("{}={}s", p.label, p.seconds))
        .collect::<Vec<_>>()
        .join(", "));

    let audio = backend_for(config.alarm_command.as_deref());
    let state = Arc::new(
        AppState::new(config.port, config.host.clone(), presets, audio)
            .with_sound(!config.mute)
            .with_theme(config.theme()),
    );

    // The single tick source
    tokio::spawn(ticker_task(Arc::clone(&state)));

    if config.console {
        tokio::spawn(console_display_task(Arc::clone(&state)));
    }

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start          - Start or resume the countdown");
    info!("  POST /pause          - Pause the countdown");
    info!("  POST /reset          - Reset to zero");
    info!("  POST /stop-alarm     - Silence the alarm");
    info!("  PUT  /time           - Edit hours/minutes/seconds");
    info!("  GET  /presets        - List presets");
    info!("  POST /presets/:label - Load a preset");
    info!("  POST /sound/toggle   - Toggle alarm sound");
    info!("  POST /theme/toggle   - Toggle light/dark theme");
    info!("  GET  /status         - Current timer status");
    info!("  GET  /health         - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.shutdown();
    info!("Server shutdown complete");
    Ok(())
}
