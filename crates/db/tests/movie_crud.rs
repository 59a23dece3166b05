//! Integration tests for movie CRUD and the optimistic-concurrency write
//! path, exercised against a real database.

use cinedex_db::models::movie::{CreateMovie, UpdateMovie};
use cinedex_db::repositories::MovieRepo;
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, genre: &str, rating: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        release_date: chrono::NaiveDate::from_ymd_opt(1984, 3, 13).unwrap(),
        genre: genre.to_string(),
        rating: rating.to_string(),
        price: Decimal::new(899, 2),
    }
}

fn replacement(movie: &cinedex_db::models::movie::Movie, title: &str) -> UpdateMovie {
    UpdateMovie {
        id: movie.id,
        title: title.to_string(),
        release_date: movie.release_date,
        genre: movie.genre.clone(),
        rating: movie.rating.clone(),
        price: movie.price,
        version: movie.version,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Ghostbusters", "Comedy", "PG"))
        .await
        .unwrap();
    assert_eq!(created.title, "Ghostbusters");
    assert_eq!(created.version, 1);
    assert_eq!(created.price, Decimal::new(899, 2));

    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().id, created.id);

    let missing = MovieRepo::find_by_id(&pool, 99_999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_price_round_trips_exactly(pool: PgPool) {
    let mut input = new_movie("Rio Bravo", "Western", "G");
    input.price = Decimal::new(1099, 2); // 10.99 must not drift
    let created = MovieRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.price.to_string(), "10.99");
}

// ---------------------------------------------------------------------------
// Optimistic-concurrency update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_current_version_succeeds(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Ghostbusters", "Comedy", "PG"))
        .await
        .unwrap();

    let updated = MovieRepo::update(&pool, movie.id, &replacement(&movie, "Ghostbusters 2"))
        .await
        .unwrap()
        .expect("update with the current version must land");

    assert_eq!(updated.title, "Ghostbusters 2");
    assert_eq!(updated.version, movie.version + 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_stale_version_is_rejected(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Ghostbusters", "Comedy", "PG"))
        .await
        .unwrap();

    // First writer wins.
    MovieRepo::update(&pool, movie.id, &replacement(&movie, "First writer"))
        .await
        .unwrap()
        .unwrap();

    // Second writer still holds the original version and must be rejected.
    let stale = MovieRepo::update(&pool, movie.id, &replacement(&movie, "Second writer"))
        .await
        .unwrap();
    assert!(stale.is_none(), "stale-version write must not land");

    // The first writer's state survived.
    let current = MovieRepo::find_by_id(&pool, movie.id).await.unwrap().unwrap();
    assert_eq!(current.title, "First writer");
    assert_eq!(current.version, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_matches_nothing(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Ghostbusters", "Comedy", "PG"))
        .await
        .unwrap();
    let input = replacement(&movie, "Ghost");

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());

    let result = MovieRepo::update(&pool, movie.id, &input).await.unwrap();
    assert!(result.is_none());
    assert!(!MovieRepo::exists(&pool, movie.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_whether_row_was_removed(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Rio Bravo", "Western", "G"))
        .await
        .unwrap();

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(!MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert_eq!(MovieRepo::count(&pool).await.unwrap(), 0);
}
