//! Tracing subscriber setup

use crate::settings::LoggingSettings;
use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging to stderr; `RUST_LOG` takes precedence over `settings.level`
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.level))?;

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
