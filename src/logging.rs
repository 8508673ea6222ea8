use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "eva",
    "eva_fit",
    "eva_gev",
    "eva_grid",
    "eva_return",
    "eva_stats",
];

/// Initialize tracing for the eva crates.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug (block summaries)
/// - 3+ -> trace (individual degenerate locations)
///
/// `RUST_LOG` overrides the verbosity if set. Calling this again after a
/// subscriber is installed has no effect.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
