use std::io;

use combined_patterns::{logging, run_demo, DemoConfig};
use tracing::{error, Level};

fn main() {
    logging::init(Level::WARN);

    let config = DemoConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A failed stdout is reported on stderr only; the exit status stays success.
    if let Err(err) = run_demo(&config, &mut out) {
        error!(%err, "demonstration output was not fully written");
    }
}
