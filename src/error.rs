//! Error types for picker initialization and the host binding.
//!
//! Color operations themselves never fail: they are total or return
//! `Option`. These errors cover setup and string-typed host input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    /// Required host elements were not supplied at initialization
    #[error("Missing elements: {}", .missing.join(", "))]
    MissingElements {
        /// Every absent identifier, in manifest order
        missing: Vec<String>,
    },

    /// The configured initial color could not be parsed
    #[error("Invalid initial color: {text:?}")]
    InvalidInitialColor { text: String },

    #[error("Unknown drag region: {0:?}")]
    UnknownRegion(String),

    #[error("Unknown text field: {0:?}")]
    UnknownField(String),

    #[error("Unknown click target: {0:?}")]
    UnknownClickTarget(String),

    /// Requested raster exceeds the engine's size limits
    #[error("Raster too large: {width}x{height}")]
    RasterTooLarge { width: u32, height: u32 },

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<PickerError> for napi::Error {
    fn from(err: PickerError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
