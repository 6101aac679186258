//! # dnscache
//!
//! Resolves hostnames through the in-memory resolver cache and, with
//! `--watch`, keeps the cache fresh in the background until Ctrl-C.

mod bootstrap;
mod di;

use clap::Parser;
use dnscache_application::services::ResolverCache;
use dnscache_domain::CliOverrides;
use dnscache_jobs::{CacheRefreshJob, JobRunner};
use std::net::IpAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "dnscache")]
#[command(version)]
#[command(about = "In-memory DNS resolution cache with background refresh")]
struct Cli {
    /// Path to a TOML config file (default: ./dnscache.toml when present)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Seconds between background refresh cycles, 0 disables refreshing
    #[arg(short = 'r', long)]
    refresh_interval: Option<u64>,

    /// Upper bound for a single system lookup, in seconds
    #[arg(short = 't', long)]
    lookup_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Keep running and refresh the cached hostnames until Ctrl-C
    #[arg(short = 'w', long)]
    watch: bool,

    /// Hostnames to resolve
    #[arg(required = true)]
    hostnames: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        refresh_interval_secs: cli.refresh_interval,
        lookup_timeout_secs: cli.lookup_timeout,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        refresh_interval_secs = config.cache.refresh_interval_secs,
        refresh_delay_ms = config.cache.refresh_delay_ms,
        lookup_timeout_secs = config.resolver.lookup_timeout_secs,
        "Configuration loaded"
    );

    let shutdown = CancellationToken::new();
    let services = di::CacheServices::new(&config, shutdown.clone());
    let cache = services.cache;

    let mut failed = 0usize;
    for hostname in &cli.hostnames {
        match cache.fetch_all(hostname).await {
            Ok(addresses) => print_addresses(hostname, &addresses),
            Err(e) => {
                error!(hostname = %hostname, error = %e, "Resolution failed");
                failed += 1;
            }
        }
    }

    if cli.watch {
        watch(
            &cache,
            services.refresh_job,
            config.cache.refresh_interval(),
            shutdown,
        )
        .await?;
    }

    if failed > 0 {
        anyhow::bail!(
            "{} of {} hostnames failed to resolve",
            failed,
            cli.hostnames.len()
        );
    }

    Ok(())
}

async fn watch(
    cache: &ResolverCache,
    refresh_job: CacheRefreshJob,
    interval: Duration,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let handles = JobRunner::new().with_cache_refresh(refresh_job).start();

    if handles.is_empty() {
        warn!("Refresh interval is 0, nothing to watch");
        return Ok(());
    }

    info!("Watching cache, press Ctrl-C to stop");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await;

    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                result?;
                info!("Shutdown signal received");
                break;
            }
            _ = ticker.tick() => {
                for hostname in cache.hostnames().await {
                    if let Some(addresses) = cache.cached(&hostname).await {
                        print_addresses(&hostname, &addresses);
                    }
                }
            }
        }
    }

    shutdown.cancel();
    for handle in handles {
        handle.await?;
    }

    let stats = cache.stats().await;
    info!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        lookups = stats.lookups,
        lookup_failures = stats.lookup_failures,
        refresh_cycles = stats.refresh_cycles,
        "Resolver cache stopped"
    );

    Ok(())
}

fn print_addresses(hostname: &str, addresses: &[IpAddr]) {
    let rendered: Vec<String> = addresses.iter().map(|ip| ip.to_string()).collect();
    println!("{}\t{}", hostname, rendered.join(" "));
}
