mod link;

pub use link::{ErrorResponse, HealthResponse, RedirectQuery, UpdateLinkRequest};
