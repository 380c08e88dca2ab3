//! Error taxonomy shared by the engine and its host layer.

use thiserror::Error;

/// Broad category of a [`SliderError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is absent; the caller may add it and retry.
    MissingConfiguration,
    /// A field is present but unusable (bad number, crossing range or limits).
    Configuration,
    /// A configured selector matches nothing inside the slider markup.
    MissingElement,
    /// A runtime operation was called outside the active state.
    Lifecycle,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SliderError {
    #[error("missing required attribute data-{field}")]
    MissingConfiguration { field: &'static str },

    #[error("invalid value {value:?} for attribute data-{field}")]
    InvalidAttribute { field: &'static str, value: String },

    #[error("invalid data-rounding: {reason}")]
    InvalidRounding { reason: String },

    #[error("{option} {selector:?} does not match any element inside the slider")]
    MissingElement {
        option: &'static str,
        selector: String,
    },

    #[error(
        "Invalid data-lower-limit or data-upper-limit: lower limit {lower} must be less than upper limit {upper}"
    )]
    InvalidLimits { lower: f64, upper: f64 },

    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("slider is not initialized")]
    NotInitialized,

    #[error("slider was already torn down")]
    AlreadyTornDown,
}

impl SliderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SliderError::MissingConfiguration { .. } => ErrorKind::MissingConfiguration,
            SliderError::InvalidAttribute { .. }
            | SliderError::InvalidRounding { .. }
            | SliderError::InvalidLimits { .. }
            | SliderError::InvalidRange { .. } => ErrorKind::Configuration,
            SliderError::MissingElement { .. } => ErrorKind::MissingElement,
            SliderError::NotInitialized | SliderError::AlreadyTornDown => ErrorKind::Lifecycle,
        }
    }

    /// `true` when supplying more configuration could make a retry succeed.
    pub fn is_missing_configuration(&self) -> bool {
        self.kind() == ErrorKind::MissingConfiguration
    }
}

pub type SliderResult<T> = std::result::Result<T, SliderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SliderError::MissingConfiguration { field: "range_min" };
        assert!(err.to_string().contains("data-range_min"));
        assert!(err.is_missing_configuration());

        let err = SliderError::MissingElement {
            option: "value_bar_selector",
            selector: ".not-existing-selector".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("value_bar_selector"));
        assert!(msg.contains(".not-existing-selector"));
        assert_eq!(err.kind(), ErrorKind::MissingElement);

        let err = SliderError::InvalidLimits {
            lower: 20.0,
            upper: 10.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid data-lower-limit or data-upper-limit"));
        assert!(msg.contains("20") && msg.contains("10"));
        assert!(!err.is_missing_configuration());
    }
}
