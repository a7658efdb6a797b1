use thiserror::Error;

use crate::decode::error::DecodeError;

#[derive(Debug, Error)]
pub enum ImsEnvistaError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to build the HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid API token (HTTP {status} from {url})")]
    Authentication {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode the response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),
}
