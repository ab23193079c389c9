use crate::config::CacheConfig;
use crate::Result;
use jiff::{SignedDuration, Timestamp};
use parking_lot::{Mutex, RwLock};
use relink_core::{CacheError, Clock, LinkCache, SystemClock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expire_at: Timestamp,
}

impl CacheEntry {
    fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expire_at <= now
    }
}

type Entries = Arc<RwLock<HashMap<String, CacheEntry>>>;

/// A TTL cache whose expired entries are removed by a periodic sweep.
///
/// Every entry gets `expire_at = now + ttl` when added. Reads do not look at
/// `expire_at`: an entry stays visible to [`get`](LinkCache::get) and counted
/// by [`len`](LinkCache::len) until the next sweep pass removes it. Staleness
/// is therefore bounded by one TTL plus one cleanup interval.
///
/// The sweep runs on a tokio task spawned at construction and owned by the
/// instance. [`stop`](Self::stop) signals it, [`shutdown`](Self::shutdown)
/// signals and joins it, and dropping the cache signals it.
///
/// # Example
///
/// ```rust,no_run
/// use relink_cache::{CacheConfig, LinkCache, SweepingCache};
///
/// # async fn example() -> Result<(), relink_cache::CacheError> {
/// let cache = SweepingCache::new(CacheConfig::default())?;
/// cache.add("a.com", "a.com");
/// assert_eq!(cache.get("a.com").as_deref(), Some("a.com"));
/// cache.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub struct SweepingCache {
    entries: Entries,
    ttl: SignedDuration,
    clock: Arc<dyn Clock>,
    stop: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl SweepingCache {
    /// Creates a cache on the system clock and starts its sweep task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: CacheConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock` and starts its sweep task.
    ///
    /// Fails with [`CacheError::Initialization`] when the sweep task cannot
    /// be started: no current tokio runtime, a zero cleanup interval, or a
    /// TTL or interval too large to schedule.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        if config.cleanup_interval.is_zero() {
            return Err(CacheError::Initialization(
                "cleanup interval must be greater than zero".to_string(),
            ));
        }

        let ttl = SignedDuration::try_from(config.ttl).map_err(|e| {
            CacheError::Initialization(format!("invalid ttl {:?}: {e}", config.ttl))
        })?;

        let first_tick = Instant::now()
            .checked_add(config.cleanup_interval)
            .ok_or_else(|| {
                CacheError::Initialization(format!(
                    "cleanup interval {:?} is too large",
                    config.cleanup_interval
                ))
            })?;

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            CacheError::Initialization(format!("cannot start sweep task: {e}"))
        })?;

        let entries = Entries::default();
        let (stop, stopped) = watch::channel(false);
        let sweeper = runtime.spawn(sweep_loop(
            Arc::clone(&entries),
            Arc::clone(&clock),
            first_tick,
            config.cleanup_interval,
            stopped,
        ));

        debug!(
            ttl = ?config.ttl,
            cleanup_interval = ?config.cleanup_interval,
            "Started cache sweep task"
        );

        Ok(Self {
            entries,
            ttl,
            clock,
            stop,
            sweeper: Mutex::new(Some(sweeper)),
        })
    }

    /// Runs one sweep pass now and returns how many entries it removed.
    pub fn sweep(&self) -> usize {
        sweep_expired(&self.entries, self.clock.as_ref())
    }

    /// Signals the sweep task to stop without waiting for it.
    ///
    /// Calling this more than once has no further effect.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    /// Signals the sweep task to stop and waits for it to finish.
    pub async fn shutdown(&self) {
        self.stop();

        let sweeper = self.sweeper.lock().take();
        if let Some(sweeper) = sweeper {
            if let Err(e) = sweeper.await {
                warn!(error = %e, "Cache sweep task ended abnormally");
            }
        }
    }

    /// Returns true while the background sweep task is running.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .as_ref()
            .is_some_and(|sweeper| !sweeper.is_finished())
    }
}

impl LinkCache for SweepingCache {
    fn add(&self, key: &str, value: &str) {
        let expire_at = self
            .clock
            .now()
            .checked_add(self.ttl)
            .unwrap_or(Timestamp::MAX);

        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expire_at,
            },
        );
        trace!(key = %key, expire_at = %expire_at, "Cached link");
    }

    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read();
        match entries.get(key) {
            Some(entry) => {
                trace!(key = %key, "Cache hit");
                Some(entry.value.clone())
            }
            None => {
                trace!(key = %key, "Cache miss");
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl Drop for SweepingCache {
    fn drop(&mut self) {
        self.stop.send_replace(true);
    }
}

impl std::fmt::Debug for SweepingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepingCache")
            .field("ttl", &self.ttl)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Removes every entry whose `expire_at` is at or before the clock's time.
///
/// Holds the write lock for the whole pass.
fn sweep_expired(entries: &RwLock<HashMap<String, CacheEntry>>, clock: &dyn Clock) -> usize {
    let mut entries = entries.write();
    let now = clock.now();
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired_at(now));
    before - entries.len()
}

async fn sweep_loop(
    entries: Entries,
    clock: Arc<dyn Clock>,
    first_tick: Instant,
    interval: Duration,
    mut stopped: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval_at(first_tick, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Also fires when the sender is gone.
            _ = stopped.changed() => break,
            _ = ticker.tick() => {
                let removed = sweep_expired(&entries, clock.as_ref());
                if removed > 0 {
                    debug!(removed, remaining = entries.read().len(), "Swept expired cache entries");
                } else {
                    trace!("Cache sweep found nothing to remove");
                }
            }
        }
    }

    debug!("Cache sweep task stopped");
}
