//! src/telemetry.rs
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `default_directive` applies when `RUST_LOG` is unset; the CLI's debug
/// flag passes "debug", which also surfaces the per-row key traces from the
/// map phase. Verbosity never changes counting results.
pub fn init_tracing(default_directive: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
