//! Logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize file-based rolling logs exactly once per process.
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Re-initialization with the same configuration is a no-op.
//! - Re-initialization with a conflicting configuration is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "ticklist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    level: &'static str,
    directory: PathBuf,
}

impl LogConfig {
    /// Builds a configuration from a level name and an absolute directory.
    ///
    /// # Errors
    /// - Unsupported level names.
    /// - Empty or non-absolute directories.
    pub fn new(level: &str, directory: &str) -> Result<Self, String> {
        let level = normalize_level(level)?;
        let trimmed = directory.trim();
        if trimmed.is_empty() {
            return Err("log directory cannot be empty".to_string());
        }
        let path = Path::new(trimmed);
        if !path.is_absolute() {
            return Err(format!(
                "log directory must be an absolute path, got `{trimmed}`"
            ));
        }
        Ok(Self {
            level,
            directory: path.to_path_buf(),
        })
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

struct LoggingState {
    config: LogConfig,
    _logger: LoggerHandle,
}

/// Initializes file logging with the given configuration.
///
/// Returns `Ok(())` when logging is active, or a human-readable error string
/// when initialization fails or conflicts with an earlier call.
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(config.directory()).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                config.directory().display()
            )
        })?;

        let logger = Logger::try_with_str(config.level())
            .map_err(|err| format!("invalid log level `{}`: {err}", config.level()))?
            .log_to_file(
                FileSpec::default()
                    .directory(config.directory())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        install_panic_hook_once();

        info!(
            "event=core_init module=logging status=ok level={} dir={} version={}",
            config.level(),
            config.directory().display(),
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            config: config.clone(),
            _logger: logger,
        })
    })?;

    if state.config != *config {
        return Err(format!(
            "logging already initialized with level `{}` at `{}`; refusing to switch",
            state.config.level(),
            state.config.directory().display()
        ));
    }

    Ok(())
}

/// Returns the active configuration, or `None` before initialization.
pub fn logging_status() -> Option<LogConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Panic payloads can carry user-controlled text; cap and flatten
        // before logging.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, sanitize_message, LogConfig};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "ticklist-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn config_normalizes_level_and_rejects_relative_dir() {
        let config = LogConfig::new(" WARNING ", "/tmp/ticklist-logs").unwrap();
        assert_eq!(config.level(), "warn");

        let error = LogConfig::new("info", "logs/dev").unwrap_err();
        assert!(error.contains("absolute"));

        let error = LogConfig::new("loud", "/tmp/ticklist-logs").unwrap_err();
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
        let first_dir = unique_temp_dir("first");
        let second_dir = unique_temp_dir("second");
        let first = LogConfig::new("info", first_dir.to_str().unwrap()).unwrap();
        let conflicting_level = LogConfig::new("debug", first_dir.to_str().unwrap()).unwrap();
        let conflicting_dir = LogConfig::new("info", second_dir.to_str().unwrap()).unwrap();

        init_logging(&first).expect("first init should succeed");
        init_logging(&first).expect("same config should be idempotent");

        let level_error = init_logging(&conflicting_level).expect_err("level conflict");
        assert!(level_error.contains("refusing to switch"));

        let dir_error = init_logging(&conflicting_dir).expect_err("directory conflict");
        assert!(dir_error.contains("refusing to switch"));

        let active = logging_status().expect("logging should be active");
        assert_eq!(active.level(), "info");
        assert_eq!(active.directory(), first_dir.as_path());
    }

    #[test]
    fn sanitize_message_removes_newlines_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }
}
