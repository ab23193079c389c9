use relink_core::{NewLink, Repository};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read links file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse links: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Counts of what a bulk load did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records written to the store.
    pub inserted: usize,
    /// Records whose active/history pair already existed.
    pub skipped: usize,
    /// Records that hit a store error and were left out.
    pub failed: usize,
}

/// A link as it appears in a seed file. Any `id` field is ignored; the
/// store assigns a fresh one.
#[derive(Debug, Deserialize)]
struct LinkSeed {
    active_link: String,
    #[serde(default)]
    history_link: String,
}

/// Reads a JSON array of links from `path` and inserts the new ones.
pub async fn load_links_from_file<R>(path: impl AsRef<Path>, repository: &R) -> Result<LoadReport, LoadError>
where
    R: Repository + ?Sized,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading links file");
    let data = tokio::fs::read(path).await?;
    load_links(&data, repository).await
}

/// Inserts every link from a JSON array whose `(active_link, history_link)`
/// pair is not already stored.
///
/// A store error on one record is logged and counted; loading carries on
/// with the next record.
pub async fn load_links<R>(data: &[u8], repository: &R) -> Result<LoadReport, LoadError>
where
    R: Repository + ?Sized,
{
    let seeds: Vec<LinkSeed> = serde_json::from_slice(data)?;
    let mut report = LoadReport::default();

    for seed in seeds {
        match repository
            .exists_pair(&seed.active_link, &seed.history_link)
            .await
        {
            Ok(true) => {
                debug!(active_link = %seed.active_link, "Link already stored, skipping");
                report.skipped += 1;
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(active_link = %seed.active_link, error = %e, "Duplicate check failed, skipping link");
                report.failed += 1;
                continue;
            }
        }

        let link = NewLink::new(seed.active_link).with_history(seed.history_link);
        match repository.insert(link).await {
            Ok(record) => {
                debug!(id = %record.id, active_link = %record.active_link, "Loaded link");
                report.inserted += 1;
            }
            Err(e) => {
                warn!(error = %e, "Failed to insert link");
                report.failed += 1;
            }
        }
    }

    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        failed = report.failed,
        "Bulk link load finished"
    );
    Ok(report)
}
