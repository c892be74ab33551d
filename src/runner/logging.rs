use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Filter used when neither the command line, `RUST_LOG`, nor the settings
/// provide one.
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive: explicit flag, then `RUST_LOG`, then the
/// settings file, then [`DEFAULT_FILTER`].
pub fn choose_filter(flag: Option<&str>, env: Option<&str>, settings: Option<&str>) -> String {
    flag.or(env)
        .or(settings)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr; when `log_dir` is given they are also appended to a
/// daily rolling `todo.log` there. Keep the returned guard alive for the
/// life of the process so buffered file output gets flushed.
pub fn init_logging(filter: &str, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter `{filter}`"))?;

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "todo.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer);

    // Route `log` records from dependencies into tracing.
    tracing_log::LogTracer::init().context("failed to install log bridge")?;
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}
