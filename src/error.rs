use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid tolerance value {value}: must be finite and non-negative")]
    InvalidTolerance { value: f64 },

    #[error("Invalid viewport margin {value}: must be finite and non-negative")]
    InvalidMargin { value: f64 },

    #[error("No bounding box for element '{element}': it is detached or not rendered")]
    MissingGeometry { element: String },

    #[error("No viewport size available while checking element '{element}'")]
    MissingViewport { element: String },

    #[error("Computed style '{property}' unavailable for element '{element}'")]
    MissingStyle { element: String, property: String },

    #[error("Unrecognized color format: '{value}'")]
    ColorFormat { value: String },

    #[error("Color channel '{channel}' value {value} out of range: expected an integer 0-255")]
    ColorChannel { channel: char, value: String },

    #[error("Snapshot decode error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Element source failure for '{element}': {message}")]
    Source { element: String, message: String },
}

impl MatchError {
    pub fn missing_geometry(element: impl Into<String>) -> Self {
        MatchError::MissingGeometry {
            element: element.into(),
        }
    }

    pub fn missing_style(element: impl Into<String>, property: impl Into<String>) -> Self {
        MatchError::MissingStyle {
            element: element.into(),
            property: property.into(),
        }
    }

    pub fn source(element: impl Into<String>, message: impl Into<String>) -> Self {
        MatchError::Source {
            element: element.into(),
            message: message.into(),
        }
    }

    pub fn color_format(value: impl Into<String>) -> Self {
        MatchError::ColorFormat {
            value: value.into(),
        }
    }

    /// Configuration errors fault the caller's inputs; geometry errors fault
    /// the page state the harness observed. Malformed color strings and
    /// snapshot payloads count as geometry: they arrive from the page, not
    /// from the test author.
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::InvalidTolerance { .. } | MatchError::InvalidMargin { .. } => {
                ErrorCategory::Configuration
            }
            MatchError::MissingGeometry { .. }
            | MatchError::MissingViewport { .. }
            | MatchError::MissingStyle { .. }
            | MatchError::ColorFormat { .. }
            | MatchError::ColorChannel { .. }
            | MatchError::Snapshot(_)
            | MatchError::Source { .. } => ErrorCategory::Geometry,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        let remediation = match self {
            MatchError::InvalidTolerance { .. } => {
                "Use a finite, non-negative tolerance value (e.g., Tolerance::percent(5.0))."
            }
            MatchError::InvalidMargin { .. } => {
                "Use a finite, non-negative margin; 0 means the exact viewport edge."
            }
            MatchError::MissingGeometry { .. } => {
                "Wait for the element to be attached and rendered before asserting on it."
            }
            MatchError::MissingViewport { .. } => {
                "Have the harness report a viewport size before visibility checks."
            }
            MatchError::MissingStyle { .. } => {
                "Verify the selector matches a styled, attached element."
            }
            MatchError::ColorFormat { .. } => "Pass colors as rgb(r, g, b) or #RRGGBB.",
            MatchError::ColorChannel { .. } => {
                "Keep each rgb() channel an integer between 0 and 255."
            }
            MatchError::Snapshot(_) => {
                "Check the snapshot JSON against the element snapshot schema (camelCase keys)."
            }
            MatchError::Source { .. } => "Inspect the harness logs for the underlying failure.",
        };
        ErrorPayload::new(self.category(), self.to_string(), remediation)
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Configuration,
    Geometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
