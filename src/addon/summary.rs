use crate::utils::logger::{LogLevel, Logger};

/// Per-run counters. Only used for the closing line and the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub uploaded: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.errors > 0
    }

    pub fn line(&self) -> String {
        format!(
            "Done: {} uploaded, {} skipped, {} failed.",
            self.uploaded, self.skipped, self.errors
        )
    }
}

pub fn print_run_summary(summary: &RunSummary) {
    let level = if summary.has_failures() {
        LogLevel::Error
    } else {
        LogLevel::Info
    };
    println!();
    Logger::new().log_message(level, &summary.line());
}
