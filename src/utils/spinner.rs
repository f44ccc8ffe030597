use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Spinner shown on stderr while a network call is in flight. indicatif hides
/// it automatically when stderr is not a terminal, so CI logs only see the
/// status lines printed afterwards.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
            .map(|s| s.tick_chars("◐◓◑◒ "))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.into());
        bar.enable_steady_tick(TICK);

        Spinner { bar }
    }

    pub fn finish_and_clear(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}

pub fn with_spinner(message: &str) -> Spinner {
    Spinner::new(message)
}
