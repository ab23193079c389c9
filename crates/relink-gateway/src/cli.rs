use clap::{Parser, ValueEnum};
use relink_cache::CacheConfig;
use relink_resolver::{ResolverConfig, StoreFailurePolicy};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "RELINK_LISTEN_ADDR";
pub const LINKS_FILE_ENV: &str = "RELINK_LINKS_FILE";
pub const CACHE_BACKEND_ENV: &str = "RELINK_CACHE_BACKEND";
pub const CACHE_TTL_ENV: &str = "RELINK_CACHE_TTL_SECS";
pub const CACHE_CLEANUP_INTERVAL_ENV: &str = "RELINK_CACHE_CLEANUP_INTERVAL_SECS";
pub const CACHE_MAX_CAPACITY_ENV: &str = "RELINK_CACHE_MAX_CAPACITY";
pub const POPULATE_ON_READ_ENV: &str = "RELINK_POPULATE_CACHE_ON_READ";
pub const STORE_FAILURE_POLICY_ENV: &str = "RELINK_STORE_FAILURE_POLICY";
pub const STORE_TIMEOUT_ENV: &str = "RELINK_STORE_TIMEOUT_MS";
pub const LOG_FORMAT_ENV: &str = "RELINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CacheBackendArg {
    #[value(name = "sweeping")]
    Sweeping,
    #[value(name = "moka")]
    Moka,
    #[value(name = "none")]
    Disabled,
}

impl Display for CacheBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheBackendArg::Sweeping => write!(f, "sweeping"),
            CacheBackendArg::Moka => write!(f, "moka"),
            CacheBackendArg::Disabled => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicyArg {
    #[value(name = "fail-open")]
    FailOpen,
    #[value(name = "fail-closed")]
    FailClosed,
}

impl From<FailurePolicyArg> for StoreFailurePolicy {
    fn from(value: FailurePolicyArg) -> Self {
        match value {
            FailurePolicyArg::FailOpen => StoreFailurePolicy::FailOpen,
            FailurePolicyArg::FailClosed => StoreFailurePolicy::FailClosed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "relink")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// JSON array of links to load into the store at startup.
    #[arg(long, env = LINKS_FILE_ENV)]
    pub links_file: Option<PathBuf>,

    #[arg(
        long,
        env = CACHE_BACKEND_ENV,
        value_enum,
        default_value_t = CacheBackendArg::Sweeping
    )]
    pub cache_backend: CacheBackendArg,

    #[arg(long, env = CACHE_TTL_ENV, default_value_t = 360 * 60)]
    pub cache_ttl_secs: u64,

    #[arg(long, env = CACHE_CLEANUP_INTERVAL_ENV, default_value_t = 60)]
    pub cache_cleanup_interval_secs: u64,

    #[arg(long, env = CACHE_MAX_CAPACITY_ENV, default_value_t = 10_000)]
    pub cache_max_capacity: u64,

    #[arg(long, env = POPULATE_ON_READ_ENV)]
    pub populate_cache_on_read: bool,

    #[arg(
        long,
        env = STORE_FAILURE_POLICY_ENV,
        value_enum,
        default_value_t = FailurePolicyArg::FailOpen
    )]
    pub store_failure_policy: FailurePolicyArg,

    #[arg(long, env = STORE_TIMEOUT_ENV)]
    pub store_timeout_ms: Option<u64>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::builder()
            .ttl(Duration::from_secs(self.cache_ttl_secs))
            .cleanup_interval(Duration::from_secs(self.cache_cleanup_interval_secs))
            .max_capacity(self.cache_max_capacity)
            .build()
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            failure_policy: self.store_failure_policy.into(),
            populate_on_read: self.populate_cache_on_read,
            store_timeout: self.store_timeout_ms.map(Duration::from_millis),
        }
    }
}
