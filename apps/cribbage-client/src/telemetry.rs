use cribbage_client::config::LogFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so they never interleave with the table on stdout.
pub fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper_util=warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(fmt_layer.with_ansi(false).json()).init(),
        LogFormat::Pretty => registry.with(fmt_layer.compact()).init(),
    }
}
