//! Console rendering of the display channel

use std::{io::Write, sync::Arc};

use tracing::{debug, info, warn};

use crate::{codec::TimeParts, state::AppState};

fn render_line(parts: TimeParts) -> String {
    format!("\r⏱️  {}   ", parts)
}

/// Background task that redraws the countdown on stdout whenever it changes
pub async fn console_display_task(state: Arc<AppState>) {
    info!("Starting console display task");

    let mut display = state.subscribe_display();

    loop {
        let parts = *display.borrow_and_update();
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout
            .write_all(render_line(parts).as_bytes())
            .and_then(|_| stdout.flush())
        {
            warn!("Failed to draw countdown: {}", e);
        }

        if display.changed().await.is_err() {
            debug!("Display channel closed");
            return;
        }
    }
}
