use async_trait::async_trait;

use crate::store::error::StoreError;
use crate::types::CityRecord;

/// The document collection holding one record per city, keyed by the
/// Wikidata identifier.
///
/// Only lookup-by-id and insert exist; records are never updated in place,
/// and re-runs rely on `find` to skip cities already recorded.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find(&self, city_wd: &str) -> Result<Option<CityRecord>, StoreError>;

    async fn insert(&self, record: &CityRecord) -> Result<(), StoreError>;
}
