use tracing_subscriber::{EnvFilter, fmt};

/// Tracing for the server binary. `RUST_LOG` wins over the configured level
/// so individual targets can be turned up without a redeploy.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(true).init();
    log_panics();
}

/// Route panic messages through tracing so they land in the same sink as
/// request logs instead of stderr.
fn log_panics() {
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown panic");

        match info.location() {
            Some(location) => tracing::error!(panic = %message, location = %location, "panic"),
            None => tracing::error!(panic = %message, "panic"),
        }
    }));
}
