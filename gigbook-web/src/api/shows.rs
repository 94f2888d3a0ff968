//! Show endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use gigbook_common::db::{self, NewShow, Show, ShowListing};
use gigbook_common::status::{self, Action, Entity};

use super::{json_body, CreatedResponse};
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Json<Vec<ShowListing>>> {
    Ok(Json(db::shows::list_shows(&state.db).await?))
}

/// POST /api/shows
///
/// `start_time` must be RFC 3339.
pub async fn create_show(
    State(state): State<AppState>,
    payload: Result<Json<NewShow>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse<Show>>)> {
    let new_show = json_body(payload)?;
    let show = db::shows::create_show(&state.db, &new_show).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: status::success(Entity::Show, Action::Create, None),
            data: show,
        }),
    ))
}
