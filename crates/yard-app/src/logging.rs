//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` for our crates when
/// `verbose` is on. Logs go to stderr so JSON output on stdout stays clean.
/// Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "info,yard_domain=debug,yard_infra=debug,yard_app=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
