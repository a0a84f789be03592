use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

// Thread-safe log storage
static LOGS: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(Vec::new())));

// Current log level
static LOG_LEVEL: Lazy<Arc<Mutex<LogLevel>>> = Lazy::new(|| Arc::new(Mutex::new(LogLevel::Info)));

// Emit workflow commands instead of plain lines when running inside a
// GitHub Actions step, so annotations and groups render in the job log.
static ACTIONS_MODE: Lazy<bool> = Lazy::new(|| {
    std::env::var("GITHUB_ACTIONS").map(|value| value == "true").unwrap_or(false)
});

// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    // Workflow command name; info lines stay plain in the job log.
    fn command(&self) -> Option<&'static str> {
        match self {
            LogLevel::Debug => Some("debug"),
            LogLevel::Info => None,
            LogLevel::Warning => Some("warning"),
            LogLevel::Error => Some("error"),
        }
    }
}

// Set the current log level
pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

// Get the current log level
pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        // Default to Info if we can't get the lock
        LogLevel::Info
    }
}

// The workflow command format requires percent-escaping of the data part.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

// Log a message with timestamp and level
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);

    if let Ok(mut logs) = LOGS.lock() {
        logs.push(formatted.clone());
    }

    // Print if the message level is >= the current log level, so Debug
    // messages only show up when the Debug level is set.
    if let Ok(current_level) = LOG_LEVEL.lock() {
        if level >= *current_level {
            if *ACTIONS_MODE {
                match level.command() {
                    Some(command) => println!("::{}::{}", command, escape_data(message)),
                    None => println!("{}", message),
                }
            } else {
                match level {
                    LogLevel::Error | LogLevel::Warning => eprintln!("{}", formatted),
                    _ => println!("{}", formatted),
                }
            }
        }
    }
}

/// Start a named, collapsible section of log output. Purely cosmetic; has no
/// effect on validation outcomes.
pub fn start_group(title: &str) {
    if let Ok(mut logs) = LOGS.lock() {
        logs.push(format!("▶ {}", title));
    }

    if *ACTIONS_MODE {
        println!("::group::{}", escape_data(title));
    } else {
        println!("▶ {}", title);
    }
}

/// Close the most recently started group.
pub fn end_group() {
    if let Ok(mut logs) = LOGS.lock() {
        logs.push("▶ end".to_string());
    }

    if *ACTIONS_MODE {
        println!("::endgroup::");
    }
}

// Get all logs
pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.clone()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ❌ Error accessing logs", timestamp)]
    }
}

// Clear all logs
pub fn clear_logs() {
    if let Ok(mut logs) = LOGS.lock() {
        logs.clear();
    }
}

// Convenience functions for different log levels
pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
