use relink_core::{LinkId, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdminError>;

#[derive(Debug, Clone, Error)]
pub enum AdminError {
    #[error("link already exists: active={active_link:?} history={history_link:?}")]
    Duplicate {
        active_link: String,
        history_link: String,
    },
    #[error("link not found: {0}")]
    NotFound(LinkId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
