//! Reference image upload zone with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use threadline_core::{IntakeSource, Side, SourceFile, first_offered};

use crate::preview::UploadPreview;

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Which print placement this zone collects.
    side: Side,
    /// The upload currently held for this side, if any.
    preview: Option<UploadPreview>,
    /// Error reported by the parent after the file was handed over
    /// (e.g. the preview URL could not be created).
    error: Option<String>,
    /// Called with the first offered file, after its bytes are read.
    on_file: EventHandler<(SourceFile, IntakeSource)>,
}

/// A click-or-drop zone for one side's reference image.
///
/// The whole zone is a `<label>` for a hidden `<input type="file">`, so
/// clicking anywhere opens the picker.  The picker's `accept="image/*"`
/// filter is advisory; whatever file arrives is forwarded.  Only the
/// first of several offered files is used.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let side = props.side;
    let on_file = props.on_file;
    let mut dragging = use_signal(|| false);
    let mut read_error = use_signal(|| Option::<String>::None);

    // Shared by the picker and drop paths so both produce the same
    // SourceFile for the same file.
    let process_files = move |files: Vec<FileData>, source: IntakeSource| async move {
        let Some((file, source)) = first_offered(files, source) else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                read_error.set(None);
                on_file.call((SourceFile::new(name, bytes.to_vec()), source));
            }
            Err(e) => {
                warn!(%side, %source, "failed to read {name}: {e}");
                read_error.set(Some(format!("Failed to read file: {e}")));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files(), IntakeSource::Picker).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files(), IntakeSource::Drop).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone-active"
    } else {
        "upload-zone"
    };
    let error = shown_error(props.error.clone(), read_error());
    let key = side.key();
    let label = side.label();

    rsx! {
        div { class: "upload-column",
            h3 { class: "side-heading side-{key}",
                "{side.marker()} {label} Print Reference"
            }

            label {
                r#for: "{side.input_id()}",
                class: "{zone_class}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| {
                    dragging.set(false);
                },
                ondrop: handle_drop,

                if let Some(ref preview) = props.preview {
                    div { class: "stack",
                        img {
                            src: "{preview.href}",
                            alt: "{label} reference",
                            class: "upload-thumb",
                        }
                        p { class: "text-success", "✅ {preview.name}" }
                        p { class: "text-muted text-sm", "{preview.details}" }
                    }
                } else {
                    div { class: "stack",
                        div { class: "upload-glyph", "📤" }
                        div {
                            p { class: "upload-prompt", "Upload {key} reference" }
                            p { class: "text-muted", "Drag & drop or click to select" }
                        }
                    }
                }

                input {
                    id: "{side.input_id()}",
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: handle_files,
                }
            }

            if let Some(ref err) = error {
                p { class: "text-error text-sm", "{err}" }
            }
        }
    }
}

/// The error to show under a zone.
///
/// A read failure is newer than any error the parent holds for this
/// side: the parent only hears about files that were read.
fn shown_error(parent: Option<String>, read: Option<String>) -> Option<String> {
    read.or(parent)
}
