//! Venue endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use gigbook_common::db::{self, SearchResults, Venue, VenueArea, VenueDetail, VenueFields};
use gigbook_common::status::{self, Action, Entity};
use gigbook_common::time;

use super::{json_body, path_id, CreatedResponse, MessageResponse, SearchQuery};
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/venues
///
/// Venues grouped by (city, state).
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Json<Vec<VenueArea>>> {
    Ok(Json(db::venues::list_venues_grouped(&state.db).await?))
}

/// GET /api/venues/search?search_term=
pub async fn search_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResults<Venue>>> {
    Ok(Json(
        db::venues::search_venues(&state.db, &query.search_term).await?,
    ))
}

/// GET /api/venues/:id
pub async fn get_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<VenueDetail>> {
    let id = path_id(path)?;
    Ok(Json(
        db::venues::get_venue_detail(&state.db, id, time::now()).await?,
    ))
}

/// POST /api/venues
pub async fn create_venue(
    State(state): State<AppState>,
    payload: Result<Json<VenueFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse<Venue>>)> {
    let fields = json_body(payload)?;
    let venue = db::venues::create_venue(&state.db, &fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: status::success(Entity::Venue, Action::Create, Some(&venue.name)),
            data: venue,
        }),
    ))
}

/// PUT /api/venues/:id
///
/// Overwrites every writable field.
pub async fn update_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<VenueFields>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;
    let fields = json_body(payload)?;
    db::venues::update_venue(&state.db, id, &fields).await?;

    Ok(Json(MessageResponse {
        message: status::success(Entity::Venue, Action::Update, Some(&fields.name)),
    }))
}

/// DELETE /api/venues/:id
pub async fn delete_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;
    db::venues::delete_venue(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: status::success(Entity::Venue, Action::Delete, None),
    }))
}
