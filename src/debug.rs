//! Log bridge for the showcase profile editor.
//!
//! Routes every `log::info!()` etc. to `/tmp/showcase_debug.log` on
//! Unix/macOS, or `%TEMP%\showcase_debug.log` on Windows. When `RUST_LOG` is
//! set the records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config
//! file's `log_level` (applied once the config is loaded via
//! [`apply_config_level`]).

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the debug log is written
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/showcase_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("showcase_debug.log");
    path
}

struct LogBridge {
    file: Mutex<Option<std::fs::File>>,
    mirror_stderr: bool,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if let Some(file) = self.file.lock().as_mut() {
            // Logging must never take the app down
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Whether the level came from `--log-level` or `RUST_LOG`
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_record(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

/// Parse the level part of `RUST_LOG` (`debug`, `showcase=trace`, ...).
///
/// Module filters are not supported; the most verbose level mentioned wins.
pub fn parse_rust_log(value: &str) -> Option<log::LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<log::LevelFilter>().ok()
        })
        .max()
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_level = rust_log.as_deref().and_then(parse_rust_log);

    let level = match (cli_level, env_level) {
        (Some(level), _) | (None, Some(level)) => {
            LEVEL_PINNED.store(true, Ordering::SeqCst);
            level
        }
        (None, None) => log::LevelFilter::Info,
    };

    let bridge = BRIDGE.get_or_init(|| {
        let path = log_path();
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&path)
            .ok();
        LogBridge {
            file: Mutex::new(file),
            mirror_stderr: rust_log.is_some(),
        }
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level);
        log::info!(
            "showcase debug session started (level={}, file={:?})",
            level,
            log_path()
        );
    } else {
        log::set_max_level(level);
    }
}

/// Apply the config file's level unless the CLI or `RUST_LOG` already chose one
pub fn apply_config_level(level: log::LevelFilter) {
    if LEVEL_PINNED.load(Ordering::SeqCst) {
        log::debug!("Config log level {} ignored (overridden)", level);
        return;
    }
    log::set_max_level(level);
    log::info!("Log level set from config: {}", level);
}
