use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvgForgeServerError>;

#[derive(Error, Debug)]
pub enum SvgForgeServerError {
    /// Unknown example-prompt category. Reported to the caller as a
    /// structured `{success: false}` payload, never as a protocol error.
    #[error("Category '{category}' not found. Available categories: all, {available}")]
    CategoryNotFound { category: String, available: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<SvgForgeServerError> for rmcp::ErrorData {
    fn from(err: SvgForgeServerError) -> Self {
        rmcp::ErrorData::internal_error(err.to_string(), None)
    }
}
