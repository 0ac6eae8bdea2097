use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::wiki::error::PageFetchError;
use crate::wiki::templates::{extract_templates, Template};

/// MediaWiki Action API of English Wikipedia.
pub const DEFAULT_API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

const USER_AGENT: &str = concat!(
    "wikiclimate/",
    env!("CARGO_PKG_VERSION"),
    " (weather box harvester)"
);

/// A page resolved through the content-retrieval interface: its identifier
/// and the template invocations extracted from its current wikitext.
#[derive(Debug, Clone, PartialEq)]
pub struct WikiPage {
    pub page_id: u64,
    pub templates: Vec<Template>,
}

/// Resolves wiki pages by exact title. Implemented by the live MediaWiki
/// client below and by in-memory fakes in tests; the locator only ever sees
/// this trait.
#[async_trait]
pub trait PageProvider: Send + Sync {
    /// `Ok(None)` means the title does not resolve to any page (the API's
    /// page-id-zero / "missing" sentinel). Whether that is fatal is the
    /// caller's decision.
    async fn fetch_page(&self, title: &str) -> Result<Option<WikiPage>, PageFetchError>;
}

/// MediaWiki API response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct QueryResponse {
        pub query: Query,
    }

    #[derive(Debug, Deserialize)]
    pub struct Query {
        #[serde(default)]
        pub pages: Vec<Page>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Page {
        #[serde(default)]
        pub pageid: u64,
        #[serde(default)]
        pub missing: bool,
        #[serde(default)]
        pub revisions: Vec<Revision>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Revision {
        pub slots: Slots,
    }

    #[derive(Debug, Deserialize)]
    pub struct Slots {
        pub main: MainSlot,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainSlot {
        pub content: String,
    }
}

/// Live client for the MediaWiki Action API, fetching one revision's
/// wikitext per page lookup.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, PageFetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(PageFetchError::ClientBuild)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PageProvider for WikipediaClient {
    async fn fetch_page(&self, title: &str) -> Result<Option<WikiPage>, PageFetchError> {
        debug!("Fetching page '{}' from {}", title, self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("rvslots", "main"),
                ("rvlimit", "1"),
                ("format", "json"),
                ("formatversion", "2"),
                ("titles", title),
            ])
            .send()
            .await
            .map_err(|e| PageFetchError::NetworkRequest(self.endpoint.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    PageFetchError::HttpStatus {
                        url: self.endpoint.clone(),
                        status,
                        source: e,
                    }
                } else {
                    PageFetchError::NetworkRequest(self.endpoint.clone(), e)
                });
            }
        };

        let body: api::QueryResponse =
            response
                .json()
                .await
                .map_err(|e| PageFetchError::JsonParse {
                    title: title.to_string(),
                    source: e,
                })?;

        let Some(page) = body.query.pages.into_iter().next() else {
            return Err(PageFetchError::UnexpectedResponse {
                title: title.to_string(),
                message: "no pages in query response".to_string(),
            });
        };

        if page.missing || page.pageid == 0 {
            info!("Page '{}' does not exist", title);
            return Ok(None);
        }

        let Some(revision) = page.revisions.into_iter().next() else {
            return Err(PageFetchError::UnexpectedResponse {
                title: title.to_string(),
                message: "page has no readable revision".to_string(),
            });
        };

        Ok(Some(WikiPage {
            page_id: page.pageid,
            templates: extract_templates(&revision.slots.main.content),
        }))
    }
}
