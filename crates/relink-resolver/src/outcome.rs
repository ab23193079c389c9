use serde::Serialize;
use std::fmt::Display;

/// What a query resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The query is some record's current active link.
    FreshMatch,
    /// The query is some record's superseded link.
    StaleMatch,
    /// The query is neither.
    NoMatch,
}

impl Outcome {
    /// HTTP status the routing layer responds with.
    ///
    /// | outcome | status |
    /// |---|---|
    /// | `FreshMatch` | 200 OK |
    /// | `StaleMatch` | 301 Moved Permanently |
    /// | `NoMatch` | 404 Not Found |
    pub fn status_code(self) -> u16 {
        match self {
            Outcome::FreshMatch => 200,
            Outcome::StaleMatch => 301,
            Outcome::NoMatch => 404,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::FreshMatch => f.write_str("fresh_match"),
            Outcome::StaleMatch => f.write_str("stale_match"),
            Outcome::NoMatch => f.write_str("no_match"),
        }
    }
}

/// Where the deciding answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Cache,
    Store,
    /// Nothing matched, or the query was not looked up at all.
    None,
}

/// The result of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub source: ResolutionSource,
    /// For a fresh match, the link to serve. For a stale match, the active
    /// link that superseded the query.
    pub target: Option<String>,
}

impl Resolution {
    pub fn fresh(source: ResolutionSource, target: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::FreshMatch,
            source,
            target: Some(target.into()),
        }
    }

    pub fn stale(superseded_by: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::StaleMatch,
            source: ResolutionSource::Store,
            target: Some(superseded_by.into()),
        }
    }

    pub fn no_match() -> Self {
        Self {
            outcome: Outcome::NoMatch,
            source: ResolutionSource::None,
            target: None,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.outcome.status_code()
    }
}
