//! File-based logging for the Kodi skill
//!
//! stdout carries the replies sent back to the host runtime, so every log
//! line goes to a daily rolling file instead.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "kodi-skill";
const DEFAULT_FILTER: &str = "kodi_skill=debug,reqwest=info,hyper=warn,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/kodi-skill.YYYY-MM-DD.log`. `RUST_LOG`
/// overrides the default filter, which keeps the skill at DEBUG, the HTTP
/// client at INFO and everything else at WARN.
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Flushes on drop; the process never tears logging down
    Box::leak(Box::new(guard));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(dir = LOG_DIR, filter = DEFAULT_FILTER, "Logging initialized");

    Ok(())
}

/// Log an outgoing Kodi JSON-RPC call, optionally with extra fields
///
/// ```ignore
/// log_api_request!("Player.Stop", 7);
/// log_api_request!("Player.Stop", 7, endpoint = %url);
/// ```
#[macro_export]
macro_rules! log_api_request {
    ($method:expr, $id:expr) => {
        tracing::debug!(method = $method, id = $id, "Kodi call sent")
    };
    ($method:expr, $id:expr, $($field:tt)+) => {
        tracing::debug!(method = $method, id = $id, $($field)+, "Kodi call sent")
    };
}

/// Log how a Kodi JSON-RPC call ended; failures are logged at ERROR
#[macro_export]
macro_rules! log_api_result {
    ($method:expr, $id:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::debug!(method = $method, id = $id, "Kodi call succeeded"),
            Err(e) => tracing::error!(method = $method, id = $id, error = %e, "Kodi call failed"),
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_bare_and_extended_fields() {
        let endpoint = "http://127.0.0.1:8080/jsonrpc";
        log_api_request!("Player.Stop", 1_u64);
        log_api_request!("Player.Stop", 2_u64, endpoint = %endpoint);

        let ok: Result<(), String> = Ok(());
        let failed: Result<(), String> = Err("refused".to_string());
        log_api_result!("Player.Stop", 1_u64, ok);
        log_api_result!("Player.Stop", 2_u64, failed);
    }
}
