//! Standalone aggregator: `examples/**/*.json` -> `data.js`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crf_tracker::aggregator;
use crf_tracker::config::AggregatorConfig;

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "crf_tracker=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AggregatorConfig::default();
    let report = aggregator::run(&config)?;

    println!("{}", report.summary(&config.output));
    Ok(())
}
