//! Handlers for the `/movies` resource.
//!
//! Reads (catalog list, detail) are anonymous; mutations require the
//! `admin` role via the [`RequireAdmin`] guard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::catalog::MovieFilter;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinedex_db::repositories::MovieRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query-string parameters for `GET /movies`.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
}

/// Request-scoped catalog view: the filtered list, the full facet sets, and
/// the echoed filter values for round-tripping into form controls.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub movies: Vec<Movie>,
    /// Distinct genres across the whole store, never narrowed by filters.
    pub genres: Vec<String>,
    /// Distinct ratings across the whole store, never narrowed by filters.
    pub ratings: Vec<String>,
    pub search: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// Filtered catalog plus facets. The three reads are issued concurrently;
/// the facet queries deliberately ignore the active filters so a user can
/// always broaden a selection back out.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<CatalogResponse>> {
    let filter = MovieFilter::new(query.search, query.genre, query.rating);

    let (movies, genres, ratings) = tokio::try_join!(
        MovieRepo::list_filtered(&state.pool, &filter),
        MovieRepo::distinct_genres(&state.pool),
        MovieRepo::distinct_ratings(&state.pool),
    )?;

    Ok(Json(CatalogResponse {
        movies,
        genres,
        ratings,
        search: filter.search,
        genre: filter.genre,
        rating: filter.rating,
    }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// POST /api/v1/movies
///
/// Validation happens before any store interaction; failures carry
/// per-field messages.
pub async fn create(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    input.validate().map_err(CoreError::from)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(id = movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/v1/movies/{id}
///
/// Full-record replacement under optimistic concurrency. The body embeds
/// the id the client believes it is editing and the version it last read.
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    // A forged or stale route/body pairing never reaches the store.
    if input.id != id {
        return Err(AppError::Core(CoreError::IdMismatch {
            route_id: id,
            body_id: input.id,
        }));
    }

    input.validate().map_err(CoreError::from)?;

    match MovieRepo::update(&state.pool, id, &input).await? {
        Some(movie) => Ok(Json(movie)),
        // Zero rows matched id + version. Re-check existence to classify:
        // deleted concurrently (404) vs modified concurrently (409). The
        // conflict is a typed result the caller reconciles; it is never
        // retried here.
        None => {
            if MovieRepo::exists(&state.pool, id).await? {
                Err(AppError::Core(CoreError::ConcurrencyConflict {
                    entity: "Movie",
                    id,
                }))
            } else {
                Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
            }
        }
    }
}

/// DELETE /api/v1/movies/{id}
///
/// Idempotent: deleting an absent row is already-satisfied, not an error.
pub async fn delete(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        tracing::info!(id, "Delete requested for missing movie; treating as already removed");
    }
    Ok(StatusCode::NO_CONTENT)
}
