//! Step progress indicator: numbered circles joined by bars.

use dioxus::prelude::*;
use threadline_core::Step;

/// Props for the [`StepProgress`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StepProgressProps {
    /// The wizard's current step.
    current: Step,
}

/// Lights every circle (and the bar leading into it) up to the current
/// step.
#[component]
pub fn StepProgress(props: StepProgressProps) -> Element {
    let current = props.current;

    rsx! {
        div { class: "progress",
            for step in Step::ALL {
                if step.previous().is_some() {
                    div {
                        class: if current >= step { "progress-bar progress-lit" } else { "progress-bar" },
                    }
                }
                div {
                    class: if current >= step { "progress-dot progress-lit" } else { "progress-dot" },
                    title: "{step.label()}",
                    "aria-current": if current == step { "step" } else { "false" },
                    span { "{step.number()}" }
                }
            }
        }
    }
}
