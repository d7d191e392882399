use tracing::level_filters::LevelFilter;

/// Initialize stderr logging from the `-v` count.
///
/// Default is warnings and errors only; `-v` adds the per-operation
/// debug traces from the client and transport crates, `-vv` everything.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
