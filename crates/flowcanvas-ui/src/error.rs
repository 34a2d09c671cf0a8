//! Error types for the browser editor

use thiserror::Error;

/// Errors raised by browser glue code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A browser API was missing or returned an error
    #[error("browser API unavailable: {0}")]
    Dom(String),

    /// The embedded configuration could not be used
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The export artifact could not be produced
    #[error("export failed: {0}")]
    Download(String),
}

impl UiError {
    /// Wraps a `JsValue` error from a web API call
    pub fn dom(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{context}: {value:?}"))
    }
}

/// Result type alias for browser glue code
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UiError::Config("bad api_url".to_string()).to_string(),
            "invalid configuration: bad api_url"
        );
        assert_eq!(
            UiError::Download("no document".to_string()).to_string(),
            "export failed: no document"
        );
    }
}
