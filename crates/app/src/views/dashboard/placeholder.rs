use dioxus::prelude::*;

const UNDER_DEVELOPMENT: &str =
    "This module is under development. The complete functionality will be implemented in the next phase.";

/// Body of the "Coming Soon" card for a module.
fn coming_soon_text(title: &str) -> String {
    format!(
        "This section will include comprehensive features for {} with forms, tables, reports, and real-time updates.",
        title.to_lowercase()
    )
}

/// Stand-in panel for modules that have no view yet.
#[component]
pub fn PlaceholderView(title: &'static str) -> Element {
    let coming_soon = coming_soon_text(title);

    rsx! {
        div { class: "placeholder-view",
            h2 { class: "placeholder-title", "{title}" }
            p { class: "placeholder-text", "{UNDER_DEVELOPMENT}" }
            div { class: "coming-soon",
                h3 { "Coming Soon" }
                p { "{coming_soon}" }
            }
        }
    }
}
