use std::{any::Any, backtrace::Backtrace, panic::PanicHookInfo};

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs the global subscriber and the panic hook. `RUST_LOG` wins over
/// `cfg.rust_log`.
pub fn init_tracing(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.rust_log))
        .map_err(|err| anyhow!("invalid log filter '{}': {err}", cfg.rust_log))?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
    std::panic::set_hook(Box::new(log_panic));
    Ok(())
}

/// Readable text of a panic payload, for logs and error bodies.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let panic = panic_message(info.payload());
    let backtrace = Backtrace::capture();
    let location = info
        .location()
        .map(|location| location.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    tracing::error!(%panic, %location, %backtrace, "handler panicked");
}
