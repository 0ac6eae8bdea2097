use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::store::error::StoreError;
use crate::store::record_store::RecordStore;
use crate::types::CityRecord;

/// SQLite-backed document store. Each city is one JSON document in the
/// `cities` table, keyed by its Wikidata id; SQLite is just the envelope.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Connects (creating the database file when missing) and ensures the
    /// collection table exists. Access is strictly sequential, so the pool
    /// is capped at a single connection; this also keeps `sqlite::memory:`
    /// databases coherent in tests.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(StoreError::Database)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cities (city_wd TEXT PRIMARY KEY, record TEXT NOT NULL)",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn find(&self, city_wd: &str) -> Result<Option<CityRecord>, StoreError> {
        let row = sqlx::query("SELECT record FROM cities WHERE city_wd = ?")
            .bind(city_wd)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let json: String = row.try_get("record")?;
                let record =
                    serde_json::from_str(&json).map_err(|source| StoreError::Decode {
                        city_wd: city_wd.to_string(),
                        source,
                    })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, record: &CityRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record).map_err(|source| StoreError::Encode {
            city_wd: record.city_wd.clone(),
            source,
        })?;
        sqlx::query("INSERT INTO cities (city_wd, record) VALUES (?, ?)")
            .bind(&record.city_wd)
            .bind(json)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
