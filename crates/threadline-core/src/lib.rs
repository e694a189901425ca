//! threadline-core: Upload wizard state and template catalog (sans-IO).
//!
//! Models the three-step flow that precedes print production:
//! upload front/back reference images -> choose a garment template ->
//! review results.
//!
//! This crate has **no I/O dependencies** -- uploads arrive as in-memory
//! bytes and display locators are created through the
//! [`LocatorFactory`] trait.  All browser interaction lives in
//! `threadline-io`.

pub mod intake;
pub mod probe;
pub mod template;
pub mod types;
pub mod wizard;

pub use intake::{
    DisplayLocator, IntakeSource, LocatorFactory, SourceFile, UploadedFile, accept, first_offered,
};
pub use probe::ImageInfo;
pub use template::{CatalogError, Template, TemplateCatalog, TemplateId};
pub use types::{Dimensions, Side};
pub use wizard::{Step, Wizard, WizardError};
