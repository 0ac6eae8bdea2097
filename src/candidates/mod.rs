mod error;
mod wikidata_client;

pub use error::CandidateQueryError;
pub use wikidata_client::{WikidataClient, DEFAULT_SPARQL_ENDPOINT};
