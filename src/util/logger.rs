use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs a logger for the test binary, so that growth events can be inspected with
/// `RUST_LOG=chained_map=trace cargo test`. Only the first call has any effect.
pub fn init_test_logger() {
    INIT.call_once_force(|_| {
        let _ = Builder::new()
            .filter_level(LevelFilter::Warn)
            .parse_default_env()
            .is_test(true)
            .try_init();
    });
}
