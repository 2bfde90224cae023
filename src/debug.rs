//! Logging bridge for watermark-studio.
//!
//! Routes every `log::info!()` etc. call to stderr as
//! `[timestamp] [LEVEL] [target] message` lines, and to a log file when one
//! is configured. stdout stays reserved for command output.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG` (a bare level name),
//! then the config file's `log_level`.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use watermark_studio_config::LogLevel;

struct LogBridge {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        eprint!("{line}");
        if let Some(file) = &self.file {
            let mut file = file.lock();
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Install the bridge as the global logger.
///
/// Returns `false` if a logger was already installed. A log file that cannot
/// be opened is reported on stderr and skipped.
pub fn init_log_bridge(level: LevelFilter, log_file: Option<&Path>) -> bool {
    let file = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Some(Mutex::new(f)),
            Err(e) => {
                eprintln!(
                    "watermark-studio: warning: cannot open log file {}: {e}",
                    path.display()
                );
                None
            }
        }
    });

    let bridge = BRIDGE.get_or_init(|| LogBridge { level, file });
    if log::set_logger(bridge).is_err() {
        return false;
    }
    log::set_max_level(bridge.level);
    true
}

/// Pick the effective level from the CLI flag, `RUST_LOG` and the config.
pub fn resolve_level(
    cli: Option<LevelFilter>,
    rust_log: Option<&str>,
    config: LogLevel,
) -> LevelFilter {
    cli.or_else(|| rust_log.and_then(level_from_env))
        .unwrap_or_else(|| config.to_level_filter())
}

/// Parse `RUST_LOG`. Only a bare level name is understood; module filters are ignored.
fn level_from_env(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

fn format_line(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
