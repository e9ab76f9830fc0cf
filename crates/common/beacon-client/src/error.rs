use thiserror::Error;

/// Failure of a beacon API call. The fetcher performs no retries; the
/// caller's pipeline decides what is worth repeating.
#[derive(Debug, Error)]
pub enum BeaconClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status code: {status}")]
    HttpStatus { status: reqwest::StatusCode },

    #[error("failed to decode beacon response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("timestamp {timestamp} is before beacon genesis time {genesis_time}")]
    SlotBeforeGenesis { timestamp: u64, genesis_time: u64 },
}
