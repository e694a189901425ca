//! Notes on reference images, shown below the upload zones.

use dioxus::prelude::*;

/// What a reference image is and how the upload step treats it.
pub const REFERENCE_NOTES: [&str; 5] = [
    "Reference images are low-quality previews from Spreadshirt that show print positioning",
    "Upload front reference if you have a front print",
    "Upload back reference if you have a back print",
    "You can upload one or both depending on your design",
    "Template selection in next step will determine final validation",
];

/// Panel listing [`REFERENCE_NOTES`].
#[component]
pub fn AboutReferences() -> Element {
    rsx! {
        div { class: "about",
            h3 { "📚 About Reference Images" }
            ul {
                for note in REFERENCE_NOTES {
                    li { "{note}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_cover_both_sides_and_the_template_step() {
        assert!(REFERENCE_NOTES.iter().any(|n| n.contains("front reference")));
        assert!(REFERENCE_NOTES.iter().any(|n| n.contains("back reference")));
        assert!(REFERENCE_NOTES.iter().any(|n| n.contains("one or both")));
        assert_eq!(
            REFERENCE_NOTES.last(),
            Some(&"Template selection in next step will determine final validation")
        );
    }
}
