use thiserror::Error;

#[derive(Debug, Error)]
pub enum CandidateQueryError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse query response")]
    JsonParse(#[source] reqwest::Error),

    #[error("Malformed query binding: bad {field} value {value:?}")]
    MalformedBinding { field: &'static str, value: String },
}
