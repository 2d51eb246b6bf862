use std::path::Path;

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SnippetConfig;

/// Installs a compact stderr logger. `RUST_LOG` takes precedence over
/// `default_filter`. A second call is a no-op.
pub fn init_logger(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// Shared startup for the demo binaries: load the config (defaults on any
/// problem), install the logger, then report the problem if there was one.
pub fn bootstrap(path: &Path) -> SnippetConfig {
    let (config, problem) = SnippetConfig::load_lenient(path);
    init_logger(&config.log_filter);
    if let Some(err) = problem {
        warn!(path = %path.display(), error = %err, "ignoring config, using defaults");
    }
    config
}
