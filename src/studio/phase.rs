//! Generation lifecycle and user-facing errors

use thiserror::Error;

use crate::i18n::{translations, Language};
use crate::payload::ImagePayload;

/// Where the session is in the generate lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Generate was attempted with no source image
    MissingImage,
    /// Generate was attempted with no style selected
    AwaitingSelection,
    /// One request is in flight
    Generating,
    Succeeded(ImagePayload),
    Failed,
}

impl Phase {
    pub fn is_generating(&self) -> bool {
        matches!(self, Phase::Generating)
    }

    /// Error shown in the banner for this phase, if any
    pub fn error(&self) -> Option<StudioError> {
        match self {
            Phase::MissingImage => Some(StudioError::NoImage),
            Phase::AwaitingSelection => Some(StudioError::NoStyle),
            Phase::Failed => Some(StudioError::GenerationFailed),
            _ => None,
        }
    }
}

/// Errors the session reports to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    #[error("no source image uploaded")]
    NoImage,

    #[error("no style selected")]
    NoStyle,

    #[error("a generation is already running")]
    Busy,

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("style is hidden by the current filters: {0}")]
    StyleHidden(String),

    /// Detail is logged, never shown
    #[error("generation failed")]
    GenerationFailed,
}

impl StudioError {
    /// Localized banner text
    pub fn message(&self, lang: Language) -> String {
        let t = translations(lang);
        match self {
            StudioError::NoImage => t.error_no_image.to_string(),
            StudioError::NoStyle | StudioError::UnknownStyle(_) | StudioError::StyleHidden(_) => {
                t.error_select.to_string()
            }
            StudioError::Busy => t.processing_title.to_string(),
            StudioError::GenerationFailed => t.error_gen.to_string(),
        }
    }
}
