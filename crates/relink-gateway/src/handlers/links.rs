use crate::error::{AppError, Result};
use crate::model::UpdateLinkRequest;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use relink_admin::AdminError;
use relink_core::{LinkId, LinkRecord, NewLink};

pub async fn list_links_handler(State(state): State<AppState>) -> Result<Json<Vec<LinkRecord>>> {
    Ok(Json(state.admin().list().await?))
}

pub async fn get_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkRecord>> {
    let id = LinkId::new(id);
    match state.admin().get(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::Admin(AdminError::NotFound(id))),
    }
}

pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(request): Json<NewLink>,
) -> Result<(StatusCode, Json<LinkRecord>)> {
    let record = state.admin().create(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateLinkRequest>,
) -> Result<Json<LinkRecord>> {
    let record = state
        .admin()
        .update(&LinkId::new(id), request.active_link)
        .await?;
    Ok(Json(record))
}

/// Deleting an unknown id is not an error.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<()>> {
    state.admin().delete(&LinkId::new(id)).await?;
    Ok(Json(()))
}
