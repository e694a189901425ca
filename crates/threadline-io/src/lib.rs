//! threadline-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, Blob object URLs for upload previews, and
//! provides the reusable UI components of the threadline wizard.

pub mod components;
pub mod object_url;
pub mod preview;

pub use components::{
    AboutReferences, REFERENCE_NOTES, ResultCard, StepProgress, TemplatePicker, UploadZone,
};
pub use object_url::{BlobUrls, ObjectUrl, ObjectUrlError};
pub use preview::UploadPreview;
