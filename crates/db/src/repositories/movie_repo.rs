//! Repository for the `movies` table.

use cinedex_core::catalog::MovieFilter;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, release_date, genre, rating, price, version, created_at, updated_at";

/// Provides CRUD and catalog-query operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row (version starts at 1).
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_date, genre, rating, price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.genre)
            .bind(&input.rating)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a movie row exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List movies matching the filter. Absent filter fields apply no
    /// restriction; present fields are AND-combined. The title search is
    /// case-insensitive (both sides upper-cased), genre and rating are
    /// exact matches. Row order follows `id` and is not contractual.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &MovieFilter,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE ($1::text IS NULL OR UPPER(title) LIKE $1 ESCAPE '\\')
               AND ($2::text IS NULL OR genre = $2)
               AND ($3::text IS NULL OR rating = $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.search_pattern())
            .bind(filter.genre.as_deref())
            .bind(filter.rating.as_deref())
            .fetch_all(pool)
            .await
    }

    /// Distinct genres across ALL movies, sorted ascending.
    ///
    /// Facet queries are deliberately unfiltered so a user can always
    /// broaden an active selection back out.
    pub async fn distinct_genres(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT genre FROM movies ORDER BY genre")
            .fetch_all(pool)
            .await
    }

    /// Distinct ratings across ALL movies, sorted ascending.
    pub async fn distinct_ratings(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT rating FROM movies ORDER BY rating")
            .fetch_all(pool)
            .await
    }

    /// Replace a movie row, guarded by its optimistic-concurrency version.
    ///
    /// The write only lands when the stored `version` still equals the one
    /// the caller last read; a successful write increments it. Returns
    /// `None` when no row matched -- the caller distinguishes "deleted
    /// concurrently" from "modified concurrently" via [`Self::exists`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $3,
                release_date = $4,
                genre = $5,
                rating = $6,
                price = $7,
                version = version + 1,
                updated_at = NOW()
             WHERE id = $1 AND version = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(input.version)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(&input.genre)
            .bind(&input.rating)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of movie rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }
}
