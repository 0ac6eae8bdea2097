mod error;
mod record_store;
mod sqlite_store;

pub use error::StoreError;
pub use record_store::RecordStore;
pub use sqlite_store::SqliteRecordStore;
