use tracing_subscriber::EnvFilter;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Install a stderr subscriber. `RUST_LOG` wins when set; otherwise each
/// `verbose` step raises `default` by one level.
pub fn init(default: &str, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(default, verbose)));

    // Keeps the first subscriber if one is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn level_for(default: &str, verbose: u8) -> &'static str {
    let start = LEVELS.iter().position(|&l| l == default).unwrap_or(1);
    LEVELS[(start + verbose as usize).min(LEVELS.len() - 1)]
}
