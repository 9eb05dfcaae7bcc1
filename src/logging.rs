// Logging setup for the binary.
// Events go to stderr so stdout carries only the demonstration output.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the stderr subscriber. Returns `false` and leaves the existing
/// subscriber in place if the caller already set a global default.
pub fn init(max_level: Level) -> bool {
    FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
