//! The top-level client wiring the candidate query, the wiki content
//! retrieval, and the record store into one run.

use std::sync::Arc;

use bon::bon;
use log::info;

use crate::candidates::{WikidataClient, DEFAULT_SPARQL_ENDPOINT};
use crate::error::WikiclimateError;
use crate::infobox::InfoboxLocator;
use crate::ingest::{ingest, IngestSummary};
use crate::store::RecordStore;
use crate::wiki::{PageProvider, WikipediaClient, DEFAULT_API_ENDPOINT};

/// Harvests weather boxes for every candidate city into the record store.
///
/// Construction goes through a builder; only the store is required.
/// Endpoints default to the public Wikidata and Wikipedia services, and
/// tests either point them at local mock servers or drop in a fake
/// `page_provider` directly.
///
/// # Examples
///
/// ```no_run
/// # use std::sync::Arc;
/// # use wikiclimate::{Harvester, SqliteRecordStore, WikiclimateError};
/// # async fn run() -> Result<(), WikiclimateError> {
/// let store = SqliteRecordStore::connect("sqlite://cities.db").await?;
/// let harvester = Harvester::builder().store(Arc::new(store)).build()?;
/// let summary = harvester.run().await?;
/// println!("{} inserted, {} skipped", summary.inserted, summary.skipped);
/// # Ok(())
/// # }
/// ```
pub struct Harvester {
    candidates: WikidataClient,
    pages: Arc<dyn PageProvider>,
    store: Arc<dyn RecordStore>,
}

#[bon]
impl Harvester {
    #[builder]
    pub fn new(
        store: Arc<dyn RecordStore>,
        sparql_endpoint: Option<String>,
        wiki_endpoint: Option<String>,
        page_provider: Option<Arc<dyn PageProvider>>,
    ) -> Result<Self, WikiclimateError> {
        let sparql_endpoint =
            sparql_endpoint.unwrap_or_else(|| DEFAULT_SPARQL_ENDPOINT.to_string());
        let candidates = WikidataClient::new(sparql_endpoint)?;

        let pages: Arc<dyn PageProvider> = match page_provider {
            Some(provider) => provider,
            None => {
                let endpoint = wiki_endpoint.unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
                Arc::new(WikipediaClient::new(endpoint)?)
            }
        };

        Ok(Self {
            candidates,
            pages,
            store,
        })
    }

    /// Fetches all candidates, then ingests them sequentially.
    pub async fn run(&self) -> Result<IngestSummary, WikiclimateError> {
        let candidates = self.candidates.fetch_candidates().await?;
        let locator = InfoboxLocator::new(self.pages.as_ref());
        let summary = ingest(self.store.as_ref(), &locator, &candidates).await?;
        info!(
            "Run complete: {} inserted, {} skipped",
            summary.inserted, summary.skipped
        );
        Ok(summary)
    }
}
