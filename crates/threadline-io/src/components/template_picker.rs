//! Garment template selector.
//!
//! One card per catalog template.  Clicking a card makes it the sole
//! selection; there is no way to deselect other than picking another.

use dioxus::prelude::*;
use threadline_core::{Template, TemplateCatalog, TemplateId};

/// Props for the [`TemplatePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TemplatePickerProps {
    /// Templates to offer, in display order.
    catalog: TemplateCatalog,
    /// Currently selected template id.
    selected: Option<TemplateId>,
    /// Callback fired when a template card is clicked.
    on_select: EventHandler<Template>,
}

/// Grid of selectable garment template cards.
#[component]
pub fn TemplatePicker(props: TemplatePickerProps) -> Element {
    rsx! {
        div { class: "template-grid",
            for template in props.catalog.templates() {
                {render_card(template, props.selected.as_ref() == Some(&template.id), &props.on_select)}
            }
        }
    }
}

/// Render a single template card.
fn render_card(
    template: &Template,
    is_selected: bool,
    on_select: &EventHandler<Template>,
) -> Element {
    let class = if is_selected {
        "template-card template-card-selected"
    } else {
        "template-card"
    };

    let onclick = {
        let on_select = *on_select;
        let template = template.clone();
        move |_| on_select.call(template.clone())
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            title: "{template.name}",
            "aria-pressed": "{is_selected}",

            div { class: "template-glyph", "{template.glyph()}" }
            h3 { class: "template-name", "{template.name}" }
            p { class: "text-muted", "{template.dimensions}" }
        }
    }
}
