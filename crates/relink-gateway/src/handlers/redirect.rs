use crate::error::Result;
use crate::model::RedirectQuery;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// Answers with the status for the link's outcome and a `null` body.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(query): Query<RedirectQuery>,
) -> Result<(StatusCode, Json<()>)> {
    let resolution = state.resolver().resolve(&query.link).await?;
    debug!(
        link = %query.link,
        outcome = %resolution.outcome,
        source = ?resolution.source,
        "Resolved link"
    );

    let status = StatusCode::from_u16(resolution.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok((status, Json(())))
}
