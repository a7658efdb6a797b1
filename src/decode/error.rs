use chrono_tz::Tz;
use thiserror::Error;

/// Errors produced while normalizing Envista payloads into domain entities.
///
/// Decoding is all-or-nothing per payload: a single malformed record fails
/// the whole batch rather than producing a partial collection with holes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required key is missing, or a value cannot be coerced to the
    /// expected type.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A reading's `datetime` string could not be parsed.
    #[error("unparseable timestamp '{value}'")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A reading's wall-clock `datetime` does not exist in the reference
    /// timezone (it falls inside a daylight-saving transition gap).
    #[error("timestamp '{value}' is not a valid local time in {tz}")]
    NonexistentLocalTime { value: String, tz: Tz },

    /// A channel passed the validity gate but carried no numeric value.
    #[error("channel '{channel}' passed the validity gate without a numeric value")]
    ChannelValue { channel: String },
}
