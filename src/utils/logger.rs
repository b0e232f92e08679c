use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Install the process-wide logger: timestamped lines on stderr.
/// A logger that is already installed is left in place.
pub fn init_logging(level: LevelFilter) {
    let installed = Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .target(Target::Stderr)
        .try_init();

    if installed.is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
