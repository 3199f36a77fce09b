//! Terminal bell alarm

use std::{io::Write, time::Duration};

use tokio::{runtime::Handle, task::JoinHandle, time::sleep};
use tracing::{debug, warn};

use super::AudioSink;

const BELL_PERIOD: Duration = Duration::from_secs(1);

/// Rings the ASCII bell on stdout, once a second while looping
#[derive(Default)]
pub struct TerminalBell {
    ringer: Option<JoinHandle<()>>,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }

    fn stop_ringer(&mut self) {
        if let Some(ringer) = self.ringer.take() {
            ringer.abort();
        }
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, looped: bool) {
        self.stop_ringer();

        let Ok(handle) = Handle::try_current() else {
            warn!("No runtime available, cannot ring terminal bell");
            return;
        };

        debug!("Ringing terminal bell (looped={})", looped);
        self.ringer = Some(handle.spawn(async move {
            loop {
                let mut stdout = std::io::stdout();
                if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                    warn!("Failed to ring terminal bell: {}", e);
                    break;
                }
                if !looped {
                    break;
                }
                sleep(BELL_PERIOD).await;
            }
        }));
    }

    fn pause(&mut self) {
        self.stop_ringer();
    }

    fn rewind(&mut self) {}
}

impl Drop for TerminalBell {
    fn drop(&mut self) {
        self.stop_ringer();
    }
}
