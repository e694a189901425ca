//! The three-step upload wizard.
//!
//! Steps run strictly in order: upload references, choose a template,
//! review results.  Forward moves are guarded (an upload must exist to
//! leave step 1, a template must be chosen to leave step 2); backward
//! moves are not.  The guards are checked here as well as by the UI
//! disabling its controls, so no caller can reach a step without its
//! prerequisites.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intake::{DisplayLocator, UploadedFile};
use crate::template::{Template, TemplateId};
use crate::types::Side;

/// A wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    /// Step 1: upload front and back reference images.
    Upload,
    /// Step 2: choose a garment template.
    Template,
    /// Step 3: review the results.
    Results,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Self; 3] = [Self::Upload, Self::Template, Self::Results];

    /// One-based position of the step.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Upload => 1,
            Self::Template => 2,
            Self::Results => 3,
        }
    }

    /// The following step, or `None` at the end.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Upload => Some(Self::Template),
            Self::Template => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// The preceding step, or `None` at the start.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Upload => None,
            Self::Template => Some(Self::Upload),
            Self::Results => Some(Self::Template),
        }
    }

    /// Short label for logs and accessibility text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Template => "Template",
            Self::Results => "Results",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

/// A navigation request the wizard refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Leaving step 1 requires at least one reference image.
    #[error("no reference image uploaded")]
    NoUploads,

    /// Leaving step 2 requires a selected template.
    #[error("no template selected")]
    NoTemplate,

    /// There is no step before the first one.
    #[error("already at the first step")]
    AtFirstStep,

    /// There is no step after the last one.
    #[error("already at the last step")]
    AtLastStep,
}

/// Wizard state: current step, the uploads for each side, and the
/// selected template.
///
/// `L` is the display locator type.  Uploads own their locators, so
/// replacing an upload or resetting the wizard releases them.
#[derive(Debug)]
pub struct Wizard<L> {
    step: Step,
    front: Option<UploadedFile<L>>,
    back: Option<UploadedFile<L>>,
    template: Option<TemplateId>,
}

impl<L> Default for Wizard<L> {
    fn default() -> Self {
        Self {
            step: Step::Upload,
            front: None,
            back: None,
            template: None,
        }
    }
}

impl<L: DisplayLocator> Wizard<L> {
    /// A fresh wizard on step 1 with nothing uploaded or selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Whether the progress indicator should light `step`.
    #[must_use]
    pub fn reached(&self, step: Step) -> bool {
        self.step >= step
    }

    /// The upload held for `side`, if any.
    #[must_use]
    pub const fn upload(&self, side: Side) -> Option<&UploadedFile<L>> {
        match side {
            Side::Front => self.front.as_ref(),
            Side::Back => self.back.as_ref(),
        }
    }

    /// Returns `true` if either side has an upload.
    #[must_use]
    pub const fn has_upload(&self) -> bool {
        self.front.is_some() || self.back.is_some()
    }

    /// Store `upload` for `side`, returning the upload it replaces.
    ///
    /// The other side is never touched.  Dropping the returned value
    /// releases the superseded locator.
    pub fn set_upload(
        &mut self,
        side: Side,
        upload: UploadedFile<L>,
    ) -> Option<UploadedFile<L>> {
        let slot = match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        };
        slot.replace(upload)
    }

    /// The selected template's id, if any.
    #[must_use]
    pub const fn selected_template(&self) -> Option<&TemplateId> {
        self.template.as_ref()
    }

    /// Record `template` as the sole selection, replacing any previous one.
    pub fn select_template(&mut self, template: &Template) {
        self.template = Some(template.id.clone());
    }

    /// Returns `true` if the current step's forward guard is satisfied.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.advance_guard().is_ok()
    }

    fn advance_guard(&self) -> Result<Step, WizardError> {
        match self.step {
            Step::Upload if !self.has_upload() => Err(WizardError::NoUploads),
            Step::Template if self.template.is_none() => Err(WizardError::NoTemplate),
            step => step.next().ok_or(WizardError::AtLastStep),
        }
    }

    /// Move to the next step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NoUploads`] on step 1 with nothing uploaded,
    /// [`WizardError::NoTemplate`] on step 2 with no template selected, and
    /// [`WizardError::AtLastStep`] on step 3.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let next = self.advance_guard()?;
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step.  Uploads and the template are kept.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::AtFirstStep`] on step 1.
    pub fn back(&mut self) -> Result<Step, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::AtFirstStep)?;
        self.step = previous;
        Ok(previous)
    }

    /// Uploads to show on the results step, front first.
    ///
    /// These are the step 1 uploads, unchanged.
    pub fn results(&self) -> impl Iterator<Item = (Side, &UploadedFile<L>)> {
        Side::ALL
            .into_iter()
            .filter_map(|side| self.upload(side).map(|upload| (side, upload)))
    }

    /// Clear both uploads and the template and return to step 1.
    ///
    /// Releases every held locator.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
