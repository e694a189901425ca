//! Result card for the review step.

use dioxus::prelude::*;
use threadline_core::Side;

use crate::preview::UploadPreview;

/// Props for the [`ResultCard`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultCardProps {
    /// Which print placement the result is for.
    side: Side,
    /// The upload to show.
    preview: UploadPreview,
}

/// Shows one side's upload as its print result.
///
/// No transformation is applied: the image is the step 1 upload.
#[component]
pub fn ResultCard(props: ResultCardProps) -> Element {
    let side = props.side;
    let preview = &props.preview;

    rsx! {
        div { class: "result-card",
            h3 { class: "side-heading side-{side.key()}",
                "{side.marker()} {side.label()} Print Result"
            }
            img {
                src: "{preview.href}",
                alt: "Processed {side.key()}",
                class: "result-image",
            }
            p { class: "text-success", "✅ Ready for production" }
            p { class: "text-muted text-sm", "{preview.name} · {preview.details}" }
        }
    }
}
