//! Common utilities for seqkit-cmd

use seqkit::ranges::Interval;
use tracing_subscriber::EnvFilter;

/// Installs a stderr log subscriber. `RUST_LOG` wins over the `-v` count.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses an interval given as `START,END`.
pub fn parse_interval(s: &str) -> Result<Interval, String> {
    let (start, end) = s
        .split_once(',')
        .ok_or_else(|| format!("expected START,END, got '{s}'"))?;
    let start = start
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid interval start '{start}': {e}"))?;
    let end = end
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid interval end '{end}': {e}"))?;
    Ok(Interval::new(start, end))
}

/// Renders values as `[a, b, c]`.
pub fn format_list<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}
