//! Dioxus UI components for threadline.
//!
//! Provides the per-side upload zone, the step progress indicator, the
//! template picker, the result card shown on the review step, and the
//! reference image notes.

mod about;
mod progress;
mod results;
mod template_picker;
mod upload;

pub use about::{AboutReferences, REFERENCE_NOTES};
pub use progress::StepProgress;
pub use results::ResultCard;
pub use template_picker::TemplatePicker;
pub use upload::UploadZone;
