//! Logging bridge for emoji2text.
//!
//! Routes every `log::info!()` etc. from the workspace crates to stderr as
//! `[LEVEL] [target] message` lines, keeping stdout free for progress output
//! and the `tables` JSON dump.
//!
//! Level precedence:
//! 1. `--log-level` on the command line
//! 2. `RUST_LOG` (`error`, `warn`, `info`, `debug`, `trace` or `off`)
//! 3. `log_level` from the config file, applied once it is loaded
//! 4. `warn`

use emoji2text_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Whether the level came from the CLI or RUST_LOG, so config must not override it.
static EXPLICIT_LEVEL: OnceLock<bool> = OnceLock::new();

/// Parse a `RUST_LOG` value. Only bare level names are understood.
fn level_from_env(value: &str) -> Option<LogLevel> {
    value.parse().ok()
}

/// Install the stderr logger.
///
/// Safe to call more than once; later calls only adjust the level.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| level_from_env(&v));
    let explicit = cli_level.or(env_level);

    let _ = log::set_logger(&LOGGER);
    log::set_max_level(
        explicit
            .map(LogLevel::to_level_filter)
            .unwrap_or(LevelFilter::Warn),
    );
    let _ = EXPLICIT_LEVEL.set(explicit.is_some());
}

/// Apply the config file's level unless the CLI or RUST_LOG already chose one.
pub fn apply_config_level(level: LogLevel) {
    if EXPLICIT_LEVEL.get().copied().unwrap_or(false) {
        return;
    }
    log::set_max_level(level.to_level_filter());
}
