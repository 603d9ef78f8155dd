use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// `0` shows warnings and errors, `1` adds info, `2` or more adds debug.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Installs the stderr subscriber. Stdout stays free for the progress bar.
pub fn init(verbosity: u8) {
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_filter(level_for(verbosity));

    // Fails only if a subscriber is already installed, which is fine to ignore.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
