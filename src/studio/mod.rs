//! Session state and generate orchestration
//!
//! A [`Session`] is the single in-memory owner of everything the user has
//! chosen: language, demographic, filters, the selected style, the uploaded
//! photo and where the current generation stands. Generation is split into
//! [`Session::begin_generate`] and [`Session::complete_generate`] so a front
//! end can release the session while the request is in flight;
//! [`Session::generate`] runs both around a single backend call.

pub mod phase;

pub use phase::{Phase, StudioError};

use tracing::{debug, error, warn};

use crate::backend::{EditRequest, ImageEditBackend};
use crate::catalog::filter::{Filter, StyleQuery};
use crate::catalog::{Catalog, Gender, HairColor, HairLength, StyleOption};
use crate::i18n::Language;
use crate::payload::ImagePayload;
use crate::prompt::build_instruction;

/// Catalog styles always restrict the edit to the hair
const PRESERVE_IDENTITY: bool = true;

/// Identifies the session state a generation was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

/// One user's studio session
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    language: Language,
    query: StyleQuery,
    selected: Option<String>,
    upload: Option<ImagePayload>,
    phase: Phase,
    /// Bumped whenever the source image changes or the session is reset
    epoch: u64,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog, language: Language, gender: Gender) -> Self {
        Self {
            catalog,
            language,
            query: StyleQuery::new(gender),
            selected: None,
            upload: None,
            phase: Phase::Idle,
            epoch: 0,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn query(&self) -> &StyleQuery {
        &self.query
    }

    pub fn gender(&self) -> Gender {
        self.query.gender
    }

    /// Switch demographic. Always clears the selection.
    pub fn set_gender(&mut self, gender: Gender) {
        self.query.gender = gender;
        self.selected = None;
    }

    pub fn set_length_filter(&mut self, length: Filter<HairLength>) {
        self.query.length = length;
    }

    pub fn set_color_filter(&mut self, color: Filter<HairColor>) {
        self.query.color = color;
    }

    pub fn clear_filters(&mut self) {
        self.query.length = Filter::All;
        self.query.color = Filter::All;
    }

    pub fn visible_styles(&self) -> Vec<&'c StyleOption> {
        self.query.apply(self.catalog)
    }

    /// Select a visible style. Selecting the current style again changes nothing.
    pub fn select_style(&mut self, id: &str) -> Result<&'c StyleOption, StudioError> {
        let catalog = self.catalog;
        let style = catalog
            .get(id)
            .ok_or_else(|| StudioError::UnknownStyle(id.to_string()))?;

        if !self.query.matches(style) {
            return Err(StudioError::StyleHidden(id.to_string()));
        }

        if self.selected.as_deref() != Some(id) {
            debug!(style = %id, "Selected style");
            self.selected = Some(style.id.clone());
        }
        Ok(style)
    }

    pub fn selected_style(&self) -> Option<&'c StyleOption> {
        let catalog = self.catalog;
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }

    pub fn upload(&self) -> Option<&ImagePayload> {
        self.upload.as_ref()
    }

    /// Replace the source photo. Clears any result or error; keeps the
    /// selection and filters.
    pub fn set_upload(&mut self, image: ImagePayload) {
        debug!(media_type = %image.media_type(), size = image.approx_size(), "New source image");
        self.upload = Some(image);
        self.invalidate();
    }

    /// Drop the photo, result, selection and error. Language, demographic
    /// and filters stay.
    pub fn reset(&mut self) {
        self.upload = None;
        self.selected = None;
        self.invalidate();
    }

    /// Any in-flight request is left to finish and then discarded.
    fn invalidate(&mut self) {
        self.epoch += 1;
        if !self.phase.is_generating() {
            self.phase = Phase::Idle;
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn result(&self) -> Option<&ImagePayload> {
        match &self.phase {
            Phase::Succeeded(image) => Some(image),
            _ => None,
        }
    }

    /// Localized banner text for the current phase
    pub fn error_banner(&self) -> Option<String> {
        self.phase.error().map(|e| e.message(self.language))
    }

    /// Close the error banner
    pub fn dismiss_error(&mut self) {
        if self.phase.error().is_some() {
            self.phase = Phase::Idle;
        }
    }

    /// Whether the generate control is enabled
    pub fn can_generate(&self) -> bool {
        self.upload.is_some() && self.selected.is_some() && !self.phase.is_generating()
    }

    /// Validate and enter `Generating`, returning the request to send.
    ///
    /// Rejections never leave the session generating.
    pub fn begin_generate(&mut self) -> Result<(GenerationTicket, EditRequest), StudioError> {
        if self.phase.is_generating() {
            return Err(StudioError::Busy);
        }

        let Some(image) = self.upload.clone() else {
            self.phase = Phase::MissingImage;
            return Err(StudioError::NoImage);
        };

        let Some(style) = self.selected_style() else {
            self.phase = Phase::AwaitingSelection;
            return Err(StudioError::NoStyle);
        };

        let instruction = build_instruction(&style.prompt, PRESERVE_IDENTITY);
        self.phase = Phase::Generating;
        debug!(style = %style.id, epoch = self.epoch, "Generation started");

        Ok((
            GenerationTicket { epoch: self.epoch },
            EditRequest::new(image, instruction),
        ))
    }

    /// Record the outcome of a request started by [`Session::begin_generate`].
    ///
    /// Outcomes for a source image that has since been replaced are dropped.
    pub fn complete_generate(
        &mut self,
        ticket: GenerationTicket,
        outcome: crate::Result<ImagePayload>,
    ) -> Result<(), StudioError> {
        if !self.phase.is_generating() {
            warn!(epoch = ticket.epoch, "Completion with no generation running; dropped");
            return Ok(());
        }

        if ticket.epoch != self.epoch {
            warn!(
                ticket = ticket.epoch,
                current = self.epoch,
                "Source changed while generating; result dropped"
            );
            self.phase = Phase::Idle;
            return Ok(());
        }

        match outcome {
            Ok(image) => {
                debug!(size = image.approx_size(), "Generation succeeded");
                self.phase = Phase::Succeeded(image);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Generation failed");
                self.phase = Phase::Failed;
                Err(StudioError::GenerationFailed)
            }
        }
    }

    /// Run one generation against `backend`
    pub async fn generate(&mut self, backend: &dyn ImageEditBackend) -> Result<(), StudioError> {
        let (ticket, request) = self.begin_generate()?;
        debug!(backend = %backend.name(), model = %backend.model(), "Dispatching edit");
        let outcome = backend.edit(request).await;
        self.complete_generate(ticket, outcome)
    }
}
