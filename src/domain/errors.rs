use derive_more::Display;

/// Errors raised around the ladder core: decoding frames, reading config,
/// talking to a snapshot source. The core itself never fails.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DepthError {
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Source Error: {}", _0)]
    Source(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for DepthError {}

impl From<serde_json::Error> for DepthError {
    fn from(err: serde_json::Error) -> Self {
        DepthError::Decode(err.to_string())
    }
}

pub type DepthResult<T> = Result<T, DepthError>;
