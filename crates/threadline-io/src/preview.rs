//! Render-ready summaries of uploads.
//!
//! Components take an [`UploadPreview`] rather than the upload itself so
//! props stay cheap to clone and compare, and the locator stays owned by
//! the wizard.

use threadline_core::{DisplayLocator, UploadedFile};

/// What the UI needs to show one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPreview {
    /// Image source URL.
    pub href: String,
    /// Original file name.
    pub name: String,
    /// Human-readable size and, when known, pixel dimensions.
    pub details: String,
}

impl UploadPreview {
    /// Summarize an upload for display.
    #[must_use]
    pub fn of<L: DisplayLocator>(upload: &UploadedFile<L>) -> Self {
        let size = format_size(upload.file().len());
        let details = match upload.info().dimensions {
            Some(dimensions) => format!("{dimensions} · {size}"),
            None => size,
        };
        Self {
            href: upload.href().to_owned(),
            name: upload.file().name().to_owned(),
            details,
        }
    }
}

/// Format a byte count with a binary unit (`"512 B"`, `"1.5 KB"`).
#[must_use]
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[expect(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for &next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}
