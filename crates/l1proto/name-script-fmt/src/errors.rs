use bitcoin::script::PushBytesError;
use thiserror::Error;

/// Outcome of decoding a script that does not carry a name operation.
///
/// Malformed, truncated and ordinary (non-name) scripts all collapse into this
/// single case. It is an expected result rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameScriptError {
    /// The script is not a well-formed name operation.
    #[error("script is not a name operation")]
    NotNameOp,
}

/// Errors that can occur while building name scripts.
#[derive(Debug, Error)]
pub enum NameBuildError {
    /// Error while converting data to `PushBytes`, typically due to invalid length.
    #[error("pushbytes: {0}")]
    PushBytes(#[from] PushBytesError),
}

/// Result of decoding a name script.
pub type NameScriptResult<T> = Result<T, NameScriptError>;

/// Result of building a name script.
pub type NameBuildResult<T> = Result<T, NameBuildError>;
