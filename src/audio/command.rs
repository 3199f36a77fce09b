//! External player command as the alarm sound

use std::time::Duration;

use tokio::{process::Command, runtime::Handle, task::JoinHandle, time::sleep};
use tracing::{debug, info, warn};

use super::AudioSink;

/// Gap between repetitions of a looping alarm command
const REPEAT_GAP: Duration = Duration::from_millis(200);

/// Runs a shell command (e.g. `paplay alarm.wav`) as the alarm.
///
/// Looping re-runs the command each time it exits. Pausing aborts the
/// player task, which kills the child process. A command has no seekable
/// position, so every play starts from the beginning.
pub struct CommandAlarm {
    command: String,
    player: Option<JoinHandle<()>>,
}

impl CommandAlarm {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            player: None,
        }
    }

    fn stop_player(&mut self) {
        if let Some(player) = self.player.take() {
            debug!("Stopping alarm command");
            player.abort();
        }
    }
}

/// Run the command once, reporting failures as strings
async fn run_once(command: &str) -> Result<(), String> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| format!("Failed to execute alarm command: {}", e))?;

    if !status.success() {
        return Err(format!("Alarm command exited with {}", status));
    }
    Ok(())
}

impl AudioSink for CommandAlarm {
    fn play(&mut self, looped: bool) {
        self.stop_player();

        let Ok(handle) = Handle::try_current() else {
            warn!("No runtime available, cannot run alarm command");
            return;
        };

        info!("Playing alarm command: {}", self.command);
        let command = self.command.clone();
        self.player = Some(handle.spawn(async move {
            loop {
                if let Err(e) = run_once(&command).await {
                    warn!("{}", e);
                    break;
                }
                if !looped {
                    break;
                }
                sleep(REPEAT_GAP).await;
            }
        }));
    }

    fn pause(&mut self) {
        self.stop_player();
    }

    fn rewind(&mut self) {}
}

impl Drop for CommandAlarm {
    fn drop(&mut self) {
        self.stop_player();
    }
}
