use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the fallible construction conveniences.
///
/// The message model itself is total: building, mutating and serializing a
/// request never fails. Only the textual conversions (`FromStr` on URIs,
/// methods and parameters) can reject their input.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid SIP URI: {0}")]
    InvalidUri(String),

    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("unknown SIP method: {0}")]
    UnknownMethod(String),
}
