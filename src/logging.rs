use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_PATH_ENV: &str = "PRIVACY_CENTRAL_LOG";

/// Initialize tracing.
///
/// `RUST_LOG` wins over `default_filter` when set. Output goes to stderr,
/// unless `PRIVACY_CENTRAL_LOG` names a file path.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
