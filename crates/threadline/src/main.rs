use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdArrowRight, LdDownload, LdRotateCcw};
use threadline_core::{IntakeSource, Side, SourceFile, Step, Template, TemplateCatalog, Wizard};
use threadline_io::{
    AboutReferences, BlobUrls, ObjectUrl, ResultCard, StepProgress, TemplatePicker,
    UploadPreview, UploadZone,
};

/// Wizard state shared by every step view.
type WizardSignal = Signal<Wizard<ObjectUrl>>;

/// Most recent intake failure and the side it happened on.
type IntakeErrorSignal = Signal<Option<(Side, String)>>;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the wizard state.  Uploads hold their object URLs, so the URLs
/// are revoked when an upload is replaced, on reset, and when this
/// component is torn down.
fn app() -> Element {
    // --- Application state ---
    let wizard = use_signal(Wizard::<ObjectUrl>::new);
    let intake_error = use_signal(|| Option::<(Side, String)>::None);
    let catalog = use_hook(TemplateCatalog::default);

    let step = wizard.read().step();

    // --- Layout ---
    rsx! {
        document::Title { "Garment Image Processor" }

        // Plain CSS theme; no build step required.
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "page",
            // Header
            header { class: "page-header",
                div { class: "container",
                    h1 { class: "title", "🎽 Garment Image Processor" }
                    p { class: "text-muted",
                        "Professional print-on-demand image processing for Spreadshirt"
                    }
                }
            }

            main { class: "container main",
                StepProgress { current: step }

                {match step {
                    Step::Upload => upload_step(wizard, intake_error),
                    Step::Template => template_step(wizard, &catalog),
                    Step::Results => results_step(wizard, intake_error, &catalog),
                }}
            }
        }
    }
}

/// Step 1: front and back upload zones.
fn upload_step(wizard: WizardSignal, intake_error: IntakeErrorSignal) -> Element {
    let (previews, can_advance) = {
        let state = wizard.read();
        let previews = Side::ALL.map(|side| state.upload(side).map(UploadPreview::of));
        (previews, state.can_advance())
    };
    let [front, back] = previews;
    let error_for = |side: Side| {
        intake_error()
            .filter(|(failed, _)| *failed == side)
            .map(|(_, message)| message)
    };

    rsx! {
        section { class: "step",
            div { class: "step-intro",
                h2 { "📤 Upload Spreadshirt Reference Images" }
                p { class: "text-muted text-lg",
                    "Upload low-resolution reference images from Spreadshirt for print positioning"
                }
            }

            div { class: "grid-2",
                UploadZone {
                    side: Side::Front,
                    preview: front,
                    error: error_for(Side::Front),
                    on_file: move |(file, source): (SourceFile, IntakeSource)| {
                        receive(wizard, intake_error, Side::Front, file, source);
                    },
                }
                UploadZone {
                    side: Side::Back,
                    preview: back,
                    error: error_for(Side::Back),
                    on_file: move |(file, source): (SourceFile, IntakeSource)| {
                        receive(wizard, intake_error, Side::Back, file, source);
                    },
                }
            }

            AboutReferences {}

            div { class: "nav nav-center",
                button {
                    class: "btn btn-primary",
                    disabled: !can_advance,
                    onclick: move |_| advance(wizard),
                    "Next: Choose Template"
                    Icon { width: 20, height: 20, icon: LdArrowRight }
                }
            }
        }
    }
}

/// Step 2: template selection.
fn template_step(mut wizard: WizardSignal, catalog: &TemplateCatalog) -> Element {
    let (selected, can_advance) = {
        let state = wizard.read();
        (state.selected_template().cloned(), state.can_advance())
    };

    rsx! {
        section { class: "step",
            div { class: "step-intro",
                h2 { "👕 Choose Your Garment Template" }
                p { class: "text-muted text-lg",
                    "Select a template that matches your garment type"
                }
            }

            TemplatePicker {
                catalog: catalog.clone(),
                selected: selected,
                on_select: move |template: Template| {
                    info!(template = %template.id, "template selected");
                    wizard.write().select_template(&template);
                },
            }

            div { class: "nav nav-split",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| back(wizard),
                    Icon { width: 20, height: 20, icon: LdArrowLeft }
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    disabled: !can_advance,
                    onclick: move |_| advance(wizard),
                    "Next: Process Images"
                    Icon { width: 20, height: 20, icon: LdArrowRight }
                }
            }
        }
    }
}

/// Step 3: the uploads, shown as results.
fn results_step(
    wizard: WizardSignal,
    intake_error: IntakeErrorSignal,
    catalog: &TemplateCatalog,
) -> Element {
    let (results, template) = {
        let state = wizard.read();
        let results: Vec<(Side, UploadPreview)> = state
            .results()
            .map(|(side, upload)| (side, UploadPreview::of(upload)))
            .collect();
        let template = state
            .selected_template()
            .and_then(|id| catalog.get(id.as_str()).ok())
            .map(|t| format!("{} · {}", t.name, t.dimensions));
        (results, template)
    };

    rsx! {
        section { class: "step",
            div { class: "step-intro",
                h2 { "⚡ Processing Complete!" }
                p { class: "text-muted text-lg",
                    "Your images have been processed successfully"
                }
                if let Some(ref template) = template {
                    p { class: "text-muted", "Template: {template}" }
                }
            }

            div { class: "grid-2",
                for (side, preview) in results {
                    ResultCard { key: "{side.key()}", side: side, preview: preview }
                }
            }

            div { class: "nav nav-center",
                // Download packaging is not implemented yet.
                button {
                    class: "btn btn-success",
                    disabled: true,
                    title: "Coming soon",
                    Icon { width: 20, height: 20, icon: LdDownload }
                    "Download Results"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| reset(wizard, intake_error),
                    Icon { width: 20, height: 20, icon: LdRotateCcw }
                    "Process New Images"
                }
            }
        }
    }
}

/// Accept a file for `side`, replacing (and releasing) any previous upload.
fn receive(
    mut wizard: WizardSignal,
    mut intake_error: IntakeErrorSignal,
    side: Side,
    file: SourceFile,
    source: IntakeSource,
) {
    let name = file.name().to_owned();
    match threadline_core::accept(&BlobUrls, file) {
        Ok(upload) => {
            let previous = wizard.write().set_upload(side, upload);
            match previous {
                Some(previous) => info!(
                    %side,
                    %source,
                    "replaced {} with {name}",
                    previous.file().name()
                ),
                None => info!(%side, %source, "accepted {name}"),
            }
            let stale = matches!(&*intake_error.peek(), Some((failed, _)) if *failed == side);
            if stale {
                intake_error.set(None);
            }
        }
        Err(e) => {
            warn!(%side, %source, "could not preview {name}: {e}");
            intake_error.set(Some((side, format!("Could not preview {name}: {e}"))));
        }
    }
}

fn advance(mut wizard: WizardSignal) {
    let outcome = wizard.write().advance();
    match outcome {
        Ok(step) => info!(%step, "advanced"),
        Err(e) => warn!("advance refused: {e}"),
    }
}

fn back(mut wizard: WizardSignal) {
    let outcome = wizard.write().back();
    match outcome {
        Ok(step) => info!(%step, "went back"),
        Err(e) => warn!("back refused: {e}"),
    }
}

/// Clear uploads and template and return to step 1.
fn reset(mut wizard: WizardSignal, mut intake_error: IntakeErrorSignal) {
    wizard.write().reset();
    intake_error.set(None);
    info!("wizard reset");
}
