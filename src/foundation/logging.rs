use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for binaries and ad-hoc debugging.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once; only the first call
/// installs anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may have installed its own global subscriber already.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .try_init();
        }
    });
}
