//! File-based logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under `config.log_dir`
/// - Non-blocking file writes
/// - Optional stderr echo
/// - Panic hook integration for crash logging
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the lifetime of the program. Returns `None` when the log directory
/// cannot be created, in which case only the console layer is installed.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("wallet_sync=info,warn"));

    let console_layer = config.console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let (file_layer, guard) = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, "wallet-sync.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory: {}", e);
            (None, None)
        }
    };

    // try_init so a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        console = config.console,
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Set up panic hook to log panics before the default handler runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
