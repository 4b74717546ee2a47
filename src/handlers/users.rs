//! User resource handlers: list, read, create.

use crate::error::AppError;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::{NewUser, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid uuid".into()))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let rows = UserService::list(&state.db, params.limit, params.offset).await?;
    Ok(success_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = UserService::get(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(success_one_ok(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let row = UserService::create(&state.db, &body).await?;
    Ok(success_one(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_uuid() {
        let id = parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn rejects_malformed_uuid() {
        assert!(matches!(parse_id("42"), Err(AppError::BadRequest(_))));
    }
}
