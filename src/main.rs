// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Print partition summaries for a range of `n`.
//!
//! ```bash
//! partitions                    # Q=1 .. Q=20
//! partitions --from 45 --to 55
//! RUST_LOG=debug partitions     # show cache growth on stderr
//! ```

use anyhow::Result;
use clap::Parser;
use partition_stats::constants::{DEFAULT_FROM, DEFAULT_TO};
use partition_stats::statistics::Counters;
use partition_stats::{cache_statistics, SummaryRange};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "partitions")]
#[command(version, about = "Exact and asymptotic partition counts with Ramanujan congruences")]
struct Cli {
    /// First n to summarize
    #[arg(long, default_value_t = DEFAULT_FROM, allow_negative_numbers = true)]
    from: i64,

    /// Last n to summarize (inclusive)
    #[arg(long, default_value_t = DEFAULT_TO, allow_negative_numbers = true)]
    to: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let range = SummaryRange::new(cli.from, cli.to)?;

    for summary in range.summaries() {
        println!("{}", summary);
    }

    let stats = cache_statistics();
    debug!(
        hits = stats.get(Counters::CacheHits),
        misses = stats.get(Counters::CacheMisses),
        computed = stats.get(Counters::EntriesComputed),
        "[partitions] Cache statistics"
    );

    Ok(())
}
