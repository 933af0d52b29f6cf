//! Diagnostic logging setup (stderr, `tracing` + `tracing-subscriber`).

use tracing_subscriber::EnvFilter;

/// `-v` enables debug, `-vv` trace. Without flags `RUST_LOG` applies, else warnings only.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("gpxfix=debug"),
        _ => EnvFilter::new("gpxfix=trace"),
    };

    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
