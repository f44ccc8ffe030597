#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

/// Renders an error followed by each of its causes, `outer: inner: ...`.
pub fn format_error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Ok,
    Skip,
    Fail,
    Error,
    Info,
    Warning,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Ok => "OK",
            LogLevel::Skip => "SKIP",
            LogLevel::Fail => "FAIL",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        println!("{}", self.format_line(level, message));
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        println!("{}", self.format_line(level, message));
        for t in trace {
            println!("     ↳ {}", t);
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        format!(
            "📦 {} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        )
    }

    #[cfg(feature = "cli")]
    fn tool_signature(&self) -> String {
        let mut s = String::new();

        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 241,
                g: 100,
                b: 54,
            })
        );
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str("cfpublish");
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn tool_signature(&self) -> String {
        "[cfpublish]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let color = match level {
            LogLevel::Ok => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Skip => Color::Rgb {
                r: 158,
                g: 158,
                b: 158,
            },
            LogLevel::Fail | LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        let mut s = String::new();
        s.push('[');
        let _ = write!(&mut s, "{}", SetForegroundColor(color));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str(level.label());
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", level.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_level_and_message() {
        let line = Logger::new().format_line(LogLevel::Skip, "Bar  curseProjectId not set");
        assert!(line.contains("SKIP"));
        assert!(line.contains("cfpublish"));
        assert!(line.ends_with("Bar  curseProjectId not set"));
    }

    #[test]
    fn error_chain_lists_causes() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let outer = crate::addon::config::ConfigError::Read {
            path: "config.json".into(),
            source: inner,
        };
        assert_eq!(
            format_error_chain(&outer),
            "failed to read config file config.json: gone"
        );
    }
}
