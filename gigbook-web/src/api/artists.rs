//! Artist endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use gigbook_common::db::{self, Artist, ArtistDetail, ArtistFields, ArtistSummary, SearchResults};
use gigbook_common::status::{self, Action, Entity};
use gigbook_common::time;

use super::{json_body, path_id, CreatedResponse, MessageResponse, SearchQuery};
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<ArtistSummary>>> {
    Ok(Json(db::artists::list_artists(&state.db).await?))
}

/// GET /api/artists/search?search_term=
pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResults<Artist>>> {
    Ok(Json(
        db::artists::search_artists(&state.db, &query.search_term).await?,
    ))
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ArtistDetail>> {
    let id = path_id(path)?;
    Ok(Json(
        db::artists::get_artist_detail(&state.db, id, time::now()).await?,
    ))
}

/// POST /api/artists
pub async fn create_artist(
    State(state): State<AppState>,
    payload: Result<Json<ArtistFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse<Artist>>)> {
    let fields = json_body(payload)?;
    let artist = db::artists::create_artist(&state.db, &fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: status::success(Entity::Artist, Action::Create, Some(&artist.name)),
            data: artist,
        }),
    ))
}

/// PUT /api/artists/:id
///
/// Overwrites every writable field.
pub async fn update_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ArtistFields>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;
    let fields = json_body(payload)?;
    db::artists::update_artist(&state.db, id, &fields).await?;

    Ok(Json(MessageResponse {
        message: status::success(Entity::Artist, Action::Update, Some(&fields.name)),
    }))
}

/// DELETE /api/artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;
    db::artists::delete_artist(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: status::success(Entity::Artist, Action::Delete, None),
    }))
}
