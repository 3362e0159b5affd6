//! afa-i18n binary entrypoint kept minimal. The actions live in `args`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use afa_i18n::util::paths;
use clap::Parser;

/// Log timestamp format: local time, `YYYY-MM-DD-THH:MM:SS`.
struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Writes to `~/.config/afa-i18n/logs/afa-i18n.log`; falls back to stderr when the file
///   cannot be opened
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = paths::logs_dir().join("afa-i18n.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LocalTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so actions still run
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LocalTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "afa-i18n starting");
    if let Err(err) = args::process_args(&args) {
        eprintln!("{err}");
        tracing::error!(error = %err, "command failed");
        std::process::exit(1);
    }
    tracing::info!("afa-i18n exited");
}
