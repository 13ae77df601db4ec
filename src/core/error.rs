//! Error types for the rate feed and the exchange client.

/// Failures of a single rate table fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read
    #[error("Request error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The feed answered with something other than 200 OK
    #[error("Unexpected response status: {status} for {url}")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not a JSON object of rate records
    #[error("Failed to parse JSON response for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by `ExchangeClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Currency catalog is empty")]
    EmptyCatalog,

    #[error("Unknown source currency code: {0}")]
    UnknownFromCode(String),

    #[error("Unknown target currency code: {0}")]
    UnknownToCode(String),

    /// Code is in the catalog but missing from the live feed
    #[error("No rate for {to} in the {from} feed")]
    UnknownTargetInFeed { from: String, to: String },

    #[error("Empty rate table returned for {0}")]
    NilResponse(String),

    #[error("No rate has been fetched yet")]
    NoResult,
}
