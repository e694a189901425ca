//! Blob object URLs for previewing uploads.
//!
//! Wraps `URL.createObjectURL` so the URL is revoked exactly once, when
//! the owning [`ObjectUrl`] is dropped.  Uploads own their URL, so
//! replacing an upload, resetting the wizard, or unmounting the app
//! frees the Blob.
//!
//! Creating a URL requires a browser environment
//! (`wasm32-unknown-unknown` target).

use threadline_core::{DisplayLocator, ImageInfo, LocatorFactory, SourceFile};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating an object URL.
#[derive(Debug, thiserror::Error)]
pub enum ObjectUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ObjectUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An owned `blob:` URL, revoked on drop.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Copy `bytes` into a new `Blob` and create an object URL for it.
    ///
    /// `media_type` becomes the Blob's type so `<img>` elements can
    /// sniff it reliably; unknown formats get an untyped Blob.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectUrlError::JsError`] if Blob or URL creation fails.
    pub fn from_bytes(bytes: &[u8], media_type: Option<&str>) -> Result<Self, ObjectUrlError> {
        let uint8_array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        let opts = BlobPropertyBag::new();
        if let Some(media_type) = media_type {
            opts.set_type(media_type);
        }
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }
}

impl DisplayLocator for ObjectUrl {
    fn href(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    // Best-effort: the page may already be unloading.
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

/// [`LocatorFactory`] that previews uploads through Blob object URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobUrls;

impl LocatorFactory for BlobUrls {
    type Locator = ObjectUrl;
    type Error = ObjectUrlError;

    fn create(&self, file: &SourceFile, info: &ImageInfo) -> Result<ObjectUrl, ObjectUrlError> {
        ObjectUrl::from_bytes(file.bytes(), info.media_type)
    }
}
