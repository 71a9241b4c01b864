//! Error type for render operations.

/// Errors raised around a render pass.
///
/// Building markup never fails; errors come from the edges: parsing a
/// payload, or applying label updates to a page that lacks a label.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("No filter label found for '{0}'")]
    LabelNotFound(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::InvalidPayload(e.to_string())
    }
}

/// Result alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
