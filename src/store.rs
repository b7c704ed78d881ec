use crate::domain::{HarvestEntry, NewHarvestEntry};
use crate::error::StoreError;
use chrono::{NaiveDateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Owner of the harvest table. The table only ever holds the most recently saved batch.
#[derive(Clone)]
pub struct HarvestStore {
    pool: SqlitePool,
}

impl HarvestStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Swaps the stored batch for `entries` in one transaction.
    ///
    /// Readers see either the old batch or the new one. If any insert fails the old batch is kept.
    pub async fn replace_all(&self, entries: &[NewHarvestEntry]) -> Result<usize, StoreError> {
        let recorded_at = Utc::now().naive_utc();
        let mut transaction = self.pool.begin().await?;

        if let Err(e) = delete_and_insert(&mut transaction, entries, recorded_at).await {
            if let Err(rollback_error) = transaction.rollback().await {
                tracing::error!("Failed to roll back batch replacement: {}", rollback_error);
            }
            return Err(e.into());
        }
        transaction.commit().await?;

        Ok(entries.len())
    }

    pub async fn list_all(&self) -> Result<Vec<HarvestEntry>, StoreError> {
        let entries = sqlx::query_as::<_, HarvestEntry>(
            "select
               id,
               first_name,
               last_name,
               day,
               quantity_collected,
               food_supplement_total,
               non_food_supplement_total,
               recorded_at
             from harvest_entries
             order by id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Deletes every row. Returns how many were removed.
    pub async fn clear_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("delete from harvest_entries")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

async fn delete_and_insert(
    transaction: &mut Transaction<'_, Sqlite>,
    entries: &[NewHarvestEntry],
    recorded_at: NaiveDateTime,
) -> Result<(), sqlx::Error> {
    sqlx::query("delete from harvest_entries")
        .execute(transaction.as_mut())
        .await?;

    for entry in entries {
        sqlx::query(
            "insert into harvest_entries
                (first_name, last_name, day, quantity_collected,
                 food_supplement_total, non_food_supplement_total, recorded_at)
             values (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.first_name)
        .bind(&entry.last_name)
        .bind(entry.day)
        .bind(entry.quantity_collected)
        .bind(entry.food_supplement_total)
        .bind(entry.non_food_supplement_total)
        .bind(recorded_at)
        .execute(transaction.as_mut())
        .await?;
    }

    Ok(())
}
