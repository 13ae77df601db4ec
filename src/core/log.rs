//! Tracing setup for the binary. Output goes to stderr so stdout carries only results.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

fn level_for(verbose: bool) -> (LevelFilter, &'static str) {
    if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::OFF, "off")
    }
}

/// Crate-local filter; `RUST_LOG` still governs dependencies such as reqwest.
fn app_targets(verbose: bool) -> Targets {
    Targets::new().with_target(env!("CARGO_CRATE_NAME"), level_for(verbose).0)
}

pub fn init_logging(verbose: bool) {
    let (_, level) = level_for(verbose);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(app_targets(verbose))
        .with(env_filter)
        .init();
}
