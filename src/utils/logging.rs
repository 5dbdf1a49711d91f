use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Initializes logging based on the MONTYHALL_LOGGING environment variable.
/// - If MONTYHALL_LOGGING=true, logging is enabled and a tracing subscriber is installed.
/// - If MONTYHALL_LOGGING=false or not set, logging is disabled.
/// - To enable logging in tests, run: MONTYHALL_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    match env::var("MONTYHALL_LOGGING") {
        Ok(value) => {
            match value.as_str() {
                "true" => ENABLE_LOGGING.store(true, Ordering::SeqCst),
                "false" => ENABLE_LOGGING.store(false, Ordering::SeqCst),
                _ => panic!("\nError: MONTYHALL_LOGGING environment variable must be 'true' or 'false'\n\nTo run the program, use one of:\n  MONTYHALL_LOGGING=true cargo run\n  MONTYHALL_LOGGING=false cargo run\n"),
            }
        }
        Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
    }

    if is_enabled() {
        // A subscriber may already be installed by an earlier test in the same binary.
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .try_init();
    }
}

/// Returns whether logging was switched on by `init_logging`
pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

pub fn log(prefix: &str, message: &str) {
    if is_enabled() {
        tracing::info!("  [{}]   {}", prefix, message);
    }
}
