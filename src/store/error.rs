use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database operation failed")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode record for city '{city_wd}'")]
    Encode {
        city_wd: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode stored record for city '{city_wd}'")]
    Decode {
        city_wd: String,
        #[source]
        source: serde_json::Error,
    },
}
