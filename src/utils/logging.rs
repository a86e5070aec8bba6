//! Structured Logging with Key Material Redaction
//!
//! Log lines go to stderr as `[timestamp] LEVEL [module] message | k=v ...`.
//! Field values are redacted by key name before they are stored on the entry:
//! - private keys, seeds and passphrases are fully masked
//! - addresses and public keys keep a short prefix/suffix
//! - signatures and ids are shortened

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Minimum level that is written out. Defaults to `Info`.
static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

/// Set the minimum level written by [`LogEntry::log`]
pub fn set_log_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current minimum log level
pub fn log_level() -> LogLevel {
    LogLevel::from_u8(MIN_LEVEL.load(Ordering::SeqCst))
}

/// How a field value is treated before it is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sensitivity {
    Secret,
    Identifier,
    Digest,
    Plain,
}

fn classify(key: &str) -> Sensitivity {
    let key = key.to_lowercase();

    const SECRET_KEYS: [&str; 7] = [
        "private", "secret", "seed", "passphrase", "mnemonic", "password", "entropy",
    ];
    const IDENTIFIER_KEYS: [&str; 5] = ["address", "recipient", "sender", "public", "alias"];
    const DIGEST_KEYS: [&str; 4] = ["signature", "id", "hash", "checksum"];

    if SECRET_KEYS.iter().any(|k| key.contains(k)) {
        Sensitivity::Secret
    } else if IDENTIFIER_KEYS.iter().any(|k| key.contains(k)) {
        Sensitivity::Identifier
    } else if DIGEST_KEYS.iter().any(|k| key.contains(k)) {
        Sensitivity::Digest
    } else {
        Sensitivity::Plain
    }
}

/// Structured log entry
#[derive(Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub module: &'static str,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, module: &'static str, message: impl Into<String>) -> Self {
        Self {
            level,
            module,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field, redacting it according to its key
    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        let stored = match classify(key) {
            Sensitivity::Secret => mask(&value),
            Sensitivity::Identifier => shorten(&value, 6, 4),
            Sensitivity::Digest => shorten(&value, 10, 6),
            Sensitivity::Plain => value,
        };
        self.fields.push((key, stored));
        self
    }

    /// Add a field that is always masked regardless of its key
    pub fn secret_field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, mask(&value.to_string())));
        self
    }

    /// Render the entry as a single line (without writing it)
    pub fn render(&self) -> String {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let mut line = format!("[{}] {} [{}] {}", timestamp, self.level, self.module, self.message);

        if !self.fields.is_empty() {
            let fields = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(" | ");
            line.push_str(&fields);
        }
        line
    }

    /// Write the entry to stderr if its level is enabled
    pub fn log(self) {
        if self.level < log_level() {
            return;
        }
        eprintln!("{}", self.render());
    }
}

fn mask(value: &str) -> String {
    match value.chars().count() {
        0 => "[EMPTY]".to_string(),
        n if n <= 4 => "[REDACTED]".to_string(),
        n => format!("[REDACTED:{}chars]", n),
    }
}

/// Keep `head` leading and `tail` trailing characters of a long value.
fn shorten(value: &str, head: usize, tail: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "[EMPTY]".to_string();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= head + tail + 3 {
        return trimmed.to_string();
    }

    let prefix: String = chars[..head].iter().collect();
    let suffix: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:ident, $module:expr, $msg:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::utils::logging::LogEntry::new(
            $crate::utils::logging::LogLevel::$level,
            $module,
            $msg
        )
        $(.field(stringify!($key), &$value))*
        .log()
    };
}

/// Convenience macro for debug logging
#[macro_export]
macro_rules! log_debug {
    ($($args:tt)*) => { $crate::__log_at!(Debug, $($args)*) };
}

/// Convenience macro for info logging
#[macro_export]
macro_rules! log_info {
    ($($args:tt)*) => { $crate::__log_at!(Info, $($args)*) };
}

/// Convenience macro for warning logging
#[macro_export]
macro_rules! log_warn {
    ($($args:tt)*) => { $crate::__log_at!(Warn, $($args)*) };
}

/// Convenience macro for error logging
#[macro_export]
macro_rules! log_error {
    ($($args:tt)*) => { $crate::__log_at!(Error, $($args)*) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(""), "[EMPTY]");
        assert_eq!(mask("abc"), "[REDACTED]");
        assert_eq!(mask("9dXhQYWZ5468TRhk"), "[REDACTED:16chars]");
    }

    #[test]
    fn test_shorten_address() {
        let shortened = shorten("3MtMoVbAHSitzohEvd6dJGR3kmJZHSePUkS", 6, 4);
        assert_eq!(shortened, "3MtMoV...PUkS");

        // short values pass through
        assert_eq!(shorten("wavesuser", 6, 4), "wavesuser");
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify("private_key"), Sensitivity::Secret);
        assert_eq!(classify("passphrase"), Sensitivity::Secret);
        assert_eq!(classify("sender_public_key"), Sensitivity::Identifier);
        assert_eq!(classify("signature"), Sensitivity::Digest);
        assert_eq!(classify("timestamp"), Sensitivity::Plain);
    }

    #[test]
    fn test_log_entry_redacts_fields() {
        let entry = LogEntry::new(LogLevel::Info, "test", "Signed transfer")
            .field("timestamp", 1478864678621u64)
            .field("private_key", "9dXhQYWZ5468TRhksJqpGT6nUySENxXi9nsCZH9AefD1")
            .field("recipient", "3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAeq");

        let line = entry.render();
        assert!(line.contains("timestamp=1478864678621"));
        assert!(line.contains("private_key=[REDACTED:44chars]"));
        assert!(line.contains("recipient=3N9UuG...XAeq"));
        assert!(!line.contains("9dXhQYWZ"));
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
