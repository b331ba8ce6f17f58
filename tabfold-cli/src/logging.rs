use std::error::Error;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log to stderr at INFO unless `RUST_LOG` says otherwise.
pub fn setup_tracing() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())?;
    debug!("tracing initialized");
    Ok(())
}
