use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier of a stored link, assigned by the store on creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A stored redirect mapping.
///
/// `history_link` holds the value `active_link` had before the last update.
/// An empty `history_link` means the record was never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: LinkId,
    pub active_link: String,
    #[serde(default)]
    pub history_link: String,
}

impl LinkRecord {
    /// Moves the current active link into history and installs `active_link`.
    ///
    /// Only one level of history is kept; the previous history link is lost.
    pub fn superseded_by(mut self, active_link: impl Into<String>) -> Self {
        self.history_link = std::mem::replace(&mut self.active_link, active_link.into());
        self
    }
}

/// Payload for creating a link. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewLink {
    pub active_link: String,
    #[serde(default)]
    pub history_link: String,
}

impl NewLink {
    pub fn new(active_link: impl Into<String>) -> Self {
        Self {
            active_link: active_link.into(),
            history_link: String::new(),
        }
    }

    pub fn with_history(mut self, history_link: impl Into<String>) -> Self {
        self.history_link = history_link.into();
        self
    }

    /// Attaches a store-assigned identifier.
    pub fn into_record(self, id: LinkId) -> LinkRecord {
        LinkRecord {
            id,
            active_link: self.active_link,
            history_link: self.history_link,
        }
    }
}
