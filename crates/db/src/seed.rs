//! Idempotent startup seeding.
//!
//! Runs once at process start, after migrations, inside a single
//! transaction: ensures the configured admin account exists and inserts the
//! four sample movies when the catalog is empty. Roles themselves are seeded
//! by the roles migration. Safe to run on every start; never duplicates.

use cinedex_core::roles::ROLE_ADMIN;
use cinedex_core::types::DbId;
use rust_decimal::Decimal;

use crate::DbPool;

/// Credentials for the bootstrap admin account. The password is hashed by
/// the caller so this crate stays free of crypto dependencies.
#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub password_hash: String,
}

/// What the seeder actually did on this run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedReport {
    pub admin_created: bool,
    pub movies_inserted: u64,
}

/// The sample catalog inserted on first run: (title, release date, genre,
/// rating, price in cents).
const SAMPLE_MOVIES: [(&str, (i32, u32, u32), &str, &str, i64); 4] = [
    ("When Harry Met Sally", (1989, 2, 12), "Romantic Comedy", "R", 799),
    ("Ghostbusters", (1984, 3, 13), "Comedy", "G", 899),
    ("Ghostbusters 2", (1986, 2, 23), "Comedy", "G", 999),
    ("Rio Bravo", (1959, 4, 15), "Western", "NA", 399),
];

/// Seed the admin account and sample movies. Idempotent: an existing admin
/// email or a non-empty movies table leaves the data untouched.
pub async fn run(pool: &DbPool, admin: &SeedAdmin) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    // Admin account: create only if the configured email is absent.
    let existing: Option<DbId> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&admin.email)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_none() {
        let role_id: DbId = sqlx::query_scalar("SELECT id FROM roles WHERE name = $1")
            .bind(ROLE_ADMIN)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO users (email, password_hash, role_id) VALUES ($1, $2, $3)")
            .bind(&admin.email)
            .bind(&admin.password_hash)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
        report.admin_created = true;
    }

    // Sample movies: insert only when the catalog is empty.
    let movie_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&mut *tx)
        .await?;

    if movie_count == 0 {
        for (title, (year, month, day), genre, rating, cents) in SAMPLE_MOVIES {
            let release_date = chrono::NaiveDate::from_ymd_opt(year, month, day)
                .expect("sample release dates are valid");
            sqlx::query(
                "INSERT INTO movies (title, release_date, genre, rating, price)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(title)
            .bind(release_date)
            .bind(genre)
            .bind(rating)
            .bind(Decimal::new(cents, 2))
            .execute(&mut *tx)
            .await?;
            report.movies_inserted += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(
        admin_created = report.admin_created,
        movies_inserted = report.movies_inserted,
        "Seed pass complete"
    );

    Ok(report)
}
