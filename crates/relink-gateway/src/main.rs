mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use std::sync::Arc;

use clap::Parser;
use relink_admin::LinkAdminService;
use relink_cache::{MokaLinkCache, NullCache, SweepingCache};
use relink_core::LinkCache;
use relink_resolver::RedirectResolver;
use relink_storage::{load_links_from_file, InMemoryRepository};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{CacheBackendArg, LogFormatArg, CLI};
use crate::state::AppState;

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

async fn serve<C>(cli: &CLI, repository: Arc<InMemoryRepository>, cache: C) -> std::io::Result<()>
where
    C: LinkCache + Clone,
{
    let admin = LinkAdminService::new(Arc::clone(&repository), cache.clone());
    let resolver = RedirectResolver::new(repository, cache, cli.resolver_config());
    let state = AppState::new(Arc::new(resolver), Arc::new(admin));

    let listener = TcpListener::bind(cli.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CLI::try_parse()?;
    init_tracing(cli.log_format);

    let repository = Arc::new(InMemoryRepository::new());
    if let Some(path) = &cli.links_file {
        load_links_from_file(path, repository.as_ref()).await?;
    }

    info!(backend = %cli.cache_backend, "Using link cache");
    match cli.cache_backend {
        CacheBackendArg::Sweeping => {
            let cache = Arc::new(SweepingCache::new(cli.cache_config())?);
            let served = serve(&cli, repository, Arc::clone(&cache)).await;
            cache.shutdown().await;
            served?;
        }
        CacheBackendArg::Moka => {
            serve(&cli, repository, MokaLinkCache::from(cli.cache_config())).await?;
        }
        CacheBackendArg::Disabled => {
            serve(&cli, repository, NullCache::new()).await?;
        }
    }

    Ok(())
}
