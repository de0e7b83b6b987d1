use std::time::{Duration, Instant};

/// How long a notification stays visible
const NOTIFICATION_TTL: Duration = Duration::from_secs(2);

/// Transient notification state, independent of the generation lifecycle
#[derive(Debug, Default)]
pub struct NotificationState {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, restarting the revert timer
    pub fn show(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.shown_at = Some(Instant::now());
    }

    /// Clear the message once the fixed delay has elapsed
    pub fn expire(&mut self, now: Instant) {
        if let Some(shown_at) = self.shown_at
            && now.duration_since(shown_at) >= NOTIFICATION_TTL
        {
            self.message = None;
            self.shown_at = None;
        }
    }

    /// The current message, if one is visible
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
