//! Opt-in tracing for macro expansion.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber once per compiler process, only if
/// `KILN_LOG` is set.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if let Ok(directives) = std::env::var("KILN_LOG") {
            let filter = EnvFilter::new(directives);
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
