use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageFetchError {
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

    #[error("Failed to parse API response for page '{title}'")]
    JsonParse {
        title: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected API response for page '{title}': {message}")]
    UnexpectedResponse { title: String, message: String },
}
