use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `KINSCAN_LOG=kinscan_detect=debug`.
pub(crate) const LOG_ENV: &str = "KINSCAN_LOG";

/// Install the stderr subscriber. `KINSCAN_LOG` wins over `--verbose`.
pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Already installed (e.g. in tests) is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
