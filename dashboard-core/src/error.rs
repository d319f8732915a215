use thiserror::Error;

/// Errors raised while turning a raw payload into display records.
///
/// A failed fetch among several parallel ones is not represented here: the
/// failing branch is simply left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewModelError {
    #[error("Malformed weather payload: {0}")]
    MalformedPayload(String),
}

impl From<serde_json::Error> for ViewModelError {
    fn from(err: serde_json::Error) -> Self {
        ViewModelError::MalformedPayload(err.to_string())
    }
}
