use std::io::stderr;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Log to stderr so `--json` output on stdout stays machine-readable.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{directive}', defaulting to 'warn'");
        EnvFilter::new("warn")
    });

    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(terminal_log).init();
}
