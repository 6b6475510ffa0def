//! Tracing setup for the CLI.
//!
//! Events go to stderr so JSON on stdout stays clean. `RUST_LOG` wins over
//! the verbosity flag.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "slots=debug,slot_engine=debug",
        _ => "slots=trace,slot_engine=trace",
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init()?;
    Ok(())
}
