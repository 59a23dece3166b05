//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// Reads are anonymous; mutations require the `admin` role (enforced by
/// handler extractors).
///
/// ```text
/// GET    /      -> list (catalog + facets, ?search=&genre=&rating=)
/// POST   /      -> create (admin)
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update (admin, optimistic concurrency)
/// DELETE /{id}  -> delete (admin, idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
}
