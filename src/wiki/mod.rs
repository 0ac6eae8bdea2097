mod error;
mod page_client;
mod templates;

pub use error::PageFetchError;
pub use page_client::{PageProvider, WikiPage, WikipediaClient, DEFAULT_API_ENDPOINT};
pub use templates::{extract_templates, Template};
