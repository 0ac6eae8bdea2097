mod candidates;
mod error;
mod harvester;
mod infobox;
mod ingest;
mod normalize;
mod store;
mod types;
mod wiki;

pub use error::WikiclimateError;
pub use harvester::*;

pub use candidates::{CandidateQueryError, WikidataClient, DEFAULT_SPARQL_ENDPOINT};
pub use infobox::{InfoboxLocator, LocateInfoboxError};
pub use ingest::{ingest, IngestSummary};
pub use normalize::{coerce_number, f_to_c, inch_to_mm, month_mean, normalize, pstdev, round1};
pub use store::{RecordStore, SqliteRecordStore, StoreError};
pub use wiki::{
    extract_templates, PageFetchError, PageProvider, Template, WikiPage, WikipediaClient,
    DEFAULT_API_ENDPOINT,
};

pub use types::candidate::Candidate;
pub use types::month::Month;
pub use types::parameter::{Aggregator, Conversion, Parameter};
pub use types::record::CityRecord;
pub use types::series::MonthlySeries;
pub use types::weather_box::WeatherBox;
