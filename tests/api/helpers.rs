use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use coffee_harvest::domain::{NewHarvestEntry, Weekday};
use coffee_harvest::store::HarvestStore;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub struct TestStore {
    pub store: HarvestStore,
    pub pool: SqlitePool,
}

/// Migrated store over a private in-memory database.
pub async fn spawn_store() -> TestStore {
    // Every connection to `sqlite::memory:` is a separate database, so keep exactly one alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database.");
    let store = HarvestStore::new(pool.clone());
    store.migrate().await.expect("Failed to migrate the database.");

    TestStore { store, pool }
}

pub fn location<B>(response: &ServiceResponse<B>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("Missing Location header.")
        .to_str()
        .expect("Location header is not ascii.")
}

pub fn entry(first: &str, last: &str, day: Weekday, quantity: f64) -> NewHarvestEntry {
    NewHarvestEntry::new(first, last, day, quantity, 100.0, 40.0)
}
