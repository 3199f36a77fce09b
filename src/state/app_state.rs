//! Main application state management

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use super::{theme::sound_label, Controls, Effect, Phase, Preset, Theme, TimerSession};
use crate::{
    audio::{AudioGate, AudioSink},
    codec::{to_seconds, TimeParts},
    tasks::TickerCommand,
};

/// The editable hours/minutes/seconds fields, exactly as entered
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeFields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl TimeFields {
    pub fn total_seconds(&self) -> i64 {
        to_seconds(&self.hours, &self.minutes, &self.seconds)
    }
}

impl From<TimeParts> for TimeFields {
    fn from(parts: TimeParts) -> Self {
        Self {
            hours: parts.hours.to_string(),
            minutes: parts.minutes.to_string(),
            seconds: parts.seconds.to_string(),
        }
    }
}

/// Everything a client needs to draw the timer
#[derive(Debug, Clone, Serialize)]
pub struct TimerStatus {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub last_set_seconds: u64,
    pub display: String,
    pub fields: TimeFields,
    pub sound_enabled: bool,
    pub sound_label: &'static str,
    pub theme: Theme,
    pub theme_label: &'static str,
    pub controls: Controls,
}

/// Controller owning the countdown session and its collaborators
pub struct AppState {
    session: Mutex<TimerSession>,
    fields: Mutex<TimeFields>,
    theme: Mutex<Theme>,
    audio: Mutex<AudioGate>,
    pub presets: Vec<Preset>,
    /// Display sink; receivers see every rendered time
    display_tx: watch::Sender<TimeParts>,
    /// Drives the single tick source
    ticker_tx: watch::Sender<TickerCommand>,
    /// Keep the receivers alive to prevent channel closure
    _display_rx: watch::Receiver<TimeParts>,
    _ticker_rx: watch::Receiver<TickerCommand>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a controller with sound on, light theme and a zeroed display
    pub fn new(port: u16, host: String, presets: Vec<Preset>, audio: Box<dyn AudioSink>) -> Self {
        let (display_tx, display_rx) = watch::channel(TimeParts::zero());
        let (ticker_tx, ticker_rx) = watch::channel(TickerCommand::Idle);

        Self {
            session: Mutex::new(TimerSession::new(true)),
            fields: Mutex::new(TimeFields::from(TimeParts::zero())),
            theme: Mutex::new(Theme::default()),
            audio: Mutex::new(AudioGate::new(audio)),
            presets,
            display_tx,
            ticker_tx,
            _display_rx: display_rx,
            _ticker_rx: ticker_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    pub fn with_sound(self, enabled: bool) -> Self {
        if let Ok(mut session) = self.session.lock() {
            *session = TimerSession::new(enabled);
        }
        self
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        if let Ok(mut current) = self.theme.lock() {
            *current = theme;
        }
        self
    }

    /// Start from the entered fields, or resume if paused
    pub fn start(&self) -> Result<TimerStatus, String> {
        self.user_action("start")?;
        let requested = self.lock_fields()?.total_seconds();
        self.transition(|session| session.start(requested))?;
        self.status()
    }

    pub fn pause(&self) -> Result<TimerStatus, String> {
        self.user_action("pause")?;
        self.transition(TimerSession::pause)?;
        self.status()
    }

    pub fn reset(&self) -> Result<TimerStatus, String> {
        self.user_action("reset")?;
        self.transition(TimerSession::reset)?;
        self.status()
    }

    pub fn stop_alarm(&self) -> Result<TimerStatus, String> {
        self.user_action("stop-alarm")?;
        self.transition(TimerSession::stop_alarm)?;
        self.status()
    }

    /// Apply the preset with this label; `None` if no such preset exists
    pub fn select_preset(&self, label: &str) -> Result<Option<TimerStatus>, String> {
        let Some(preset) = self.presets.iter().find(|p| p.label == label) else {
            warn!("Unknown preset requested: {}", label);
            return Ok(None);
        };

        self.user_action(&format!("preset:{}", preset.label))?;
        let seconds = preset.seconds;
        self.transition(|session| session.apply_preset(seconds))?;
        self.status().map(Some)
    }

    /// Overwrite the editable fields. Ignored while the countdown owns the display.
    pub fn set_fields(&self, fields: TimeFields) -> Result<TimerStatus, String> {
        self.user_action("set-time")?;
        let phase = self.lock_session()?.phase();
        if matches!(phase, Phase::Initial | Phase::Finished) {
            info!(
                "Time fields set to {}:{}:{}",
                fields.hours, fields.minutes, fields.seconds
            );
            *self.lock_fields()? = fields;
        } else {
            warn!("Ignoring time edit while {}", phase);
        }
        self.status()
    }

    pub fn toggle_sound(&self) -> Result<TimerStatus, String> {
        self.user_action("toggle-sound")?;
        self.lock_session()?.toggle_sound();
        self.status()
    }

    pub fn toggle_theme(&self) -> Result<TimerStatus, String> {
        self.user_action("toggle-theme")?;
        let mut theme = self.theme.lock()
            .map_err(|e| format!("Failed to lock theme: {}", e))?;
        *theme = theme.toggled();
        info!("Theme switched to {:?}", *theme);
        drop(theme);
        self.status()
    }

    /// Deliver one tick from the tick source armed for `epoch`
    pub fn tick(&self, epoch: u64) -> Result<(), String> {
        self.transition(|session| session.tick(epoch))
    }

    /// Silence the alarm and stop ticking before the process exits
    pub fn shutdown(&self) {
        if let Ok(mut audio) = self.audio.lock() {
            audio.silence();
        }
        self.ticker_tx.send_replace(TickerCommand::Idle);
        info!("Timer shut down");
    }

    pub fn status(&self) -> Result<TimerStatus, String> {
        let snapshot = self.lock_session()?.snapshot();
        let fields = self.lock_fields()?.clone();
        let theme = *self.theme.lock()
            .map_err(|e| format!("Failed to lock theme: {}", e))?;

        Ok(TimerStatus {
            phase: snapshot.phase,
            remaining_seconds: snapshot.remaining,
            last_set_seconds: snapshot.last_set_time,
            display: self.display_tx.borrow().to_string(),
            fields,
            sound_enabled: snapshot.sound_enabled,
            sound_label: sound_label(snapshot.sound_enabled),
            theme,
            theme_label: theme.toggle_label(),
            controls: snapshot.phase.controls(),
        })
    }

    /// Subscribe to rendered times
    pub fn subscribe_display(&self) -> watch::Receiver<TimeParts> {
        self.display_tx.subscribe()
    }

    /// Subscribe to tick source commands
    pub fn subscribe_ticker(&self) -> watch::Receiver<TickerCommand> {
        self.ticker_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Record a user interaction; the first one unlocks audio playback
    fn user_action(&self, action: &str) -> Result<(), String> {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.audio.lock()
            .map_err(|e| format!("Failed to lock audio: {}", e))?
            .unlock();
        Ok(())
    }

    /// Run a session operation and carry out its effects under the session lock
    fn transition<F>(&self, op: F) -> Result<(), String>
    where
        F: FnOnce(&mut TimerSession) -> Vec<Effect>,
    {
        let mut session = self.lock_session()?;
        let effects = op(&mut *session);
        for effect in effects {
            self.apply(effect)?;
        }
        Ok(())
    }

    fn apply(&self, effect: Effect) -> Result<(), String> {
        match effect {
            Effect::Render(parts) => {
                *self.lock_fields()? = TimeFields::from(parts);
                if let Err(e) = self.display_tx.send(parts) {
                    warn!("Failed to send display update: {}", e);
                }
            }
            Effect::StartTicking { epoch } => {
                if let Err(e) = self.ticker_tx.send(TickerCommand::Run { epoch }) {
                    warn!("Failed to arm ticker: {}", e);
                }
            }
            Effect::StopTicking => {
                if let Err(e) = self.ticker_tx.send(TickerCommand::Idle) {
                    warn!("Failed to stop ticker: {}", e);
                }
            }
            Effect::PlayAlarm { looped } => {
                self.audio.lock()
                    .map_err(|e| format!("Failed to lock audio: {}", e))?
                    .play(looped);
            }
            Effect::SilenceAlarm => {
                self.audio.lock()
                    .map_err(|e| format!("Failed to lock audio: {}", e))?
                    .silence();
            }
        }
        Ok(())
    }

    fn lock_session(&self) -> Result<std::sync::MutexGuard<'_, TimerSession>, String> {
        self.session.lock()
            .map_err(|e| format!("Failed to lock timer session: {}", e))
    }

    fn lock_fields(&self) -> Result<std::sync::MutexGuard<'_, TimeFields>, String> {
        self.fields.lock()
            .map_err(|e| format!("Failed to lock time fields: {}", e))
    }
}
