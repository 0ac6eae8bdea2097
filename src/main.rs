use std::sync::Arc;

use wikiclimate::{Harvester, SqliteRecordStore, WikiclimateError};

const DEFAULT_DB_URL: &str = "sqlite://cities.db";

#[tokio::main]
async fn main() -> Result<(), WikiclimateError> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let db_url = std::env::var("WIKICLIMATE_DB").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());
    let store = SqliteRecordStore::connect(&db_url).await?;

    let harvester = Harvester::builder().store(Arc::new(store)).build()?;
    harvester.run().await?;
    Ok(())
}
