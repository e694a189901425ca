//! Upload intake: turning an offered file into a previewable upload.
//!
//! Both input modalities (drag-and-drop and the file picker) funnel
//! through [`accept`], so the same file yields the same upload no
//! matter how it arrived.  No MIME type or size validation happens
//! here; the picker's `accept` filter is left to the browser.
//!
//! Display locators are created through a [`LocatorFactory`] and are
//! released by dropping them.  Whoever owns an [`UploadedFile`] owns
//! its locator, so replacing or discarding an upload frees it.

use std::fmt;

use crate::probe::{self, ImageInfo};

/// The raw file handle: a file name and its bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a source file from its name and contents.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// File name as offered by the browser or filesystem.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the file in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the file has no contents.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A transient reference that lets a UI display an uploaded file.
///
/// Implementations release their underlying resource on drop.
pub trait DisplayLocator {
    /// The URL (or URL-like string) used as an image source.
    fn href(&self) -> &str;
}

/// Creates display locators for accepted files.
pub trait LocatorFactory {
    /// The locator type produced.
    type Locator: DisplayLocator;
    /// Error returned when a locator cannot be created.
    type Error;

    /// Create a locator for `file`.
    ///
    /// `info` carries the probed media type, which browser
    /// implementations use as the Blob type.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the underlying platform refuses to
    /// create the locator.
    fn create(&self, file: &SourceFile, info: &ImageInfo) -> Result<Self::Locator, Self::Error>;
}

/// How a file reached the intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeSource {
    /// Dropped onto an upload zone.
    Drop,
    /// Chosen through the file picker.
    Picker,
}

impl fmt::Display for IntakeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Drop => "drag-and-drop",
            Self::Picker => "file picker",
        })
    }
}

/// An accepted upload: the raw file, what probing found, and the
/// locator that displays it.
#[derive(Debug, PartialEq)]
pub struct UploadedFile<L> {
    file: SourceFile,
    info: ImageInfo,
    locator: L,
}

impl<L: DisplayLocator> UploadedFile<L> {
    /// The raw file handle.
    #[must_use]
    pub const fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Probed image format and dimensions.
    #[must_use]
    pub const fn info(&self) -> &ImageInfo {
        &self.info
    }

    /// Where the upload can be displayed from.
    #[must_use]
    pub fn href(&self) -> &str {
        self.locator.href()
    }
}

/// Pick the file an intake event contributes: the first one offered,
/// tagged with how it arrived.
///
/// Any further files in the same drop or picker selection are ignored.
/// Generic over the file handle so the browser can defer reading bytes
/// until after the choice is made.
pub fn first_offered<T>(
    files: impl IntoIterator<Item = T>,
    source: IntakeSource,
) -> Option<(T, IntakeSource)> {
    files.into_iter().next().map(|file| (file, source))
}

/// Accept a single offered file.
///
/// Probes the image header and asks `factory` for a display locator.
///
/// # Errors
///
/// Returns the factory's error if the locator cannot be created.
pub fn accept<F: LocatorFactory>(
    factory: &F,
    file: SourceFile,
) -> Result<UploadedFile<F::Locator>, F::Error> {
    let info = probe::probe(file.bytes());
    let locator = factory.create(&file, &info)?;
    Ok(UploadedFile {
        file,
        info,
        locator,
    })
}
