use dioxus::prelude::*;

/// Search field with a leading icon slot. Purely presentational.
#[component]
pub fn SearchBar(
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            if let Some(icon) = icon {
                span { class: "search-bar-icon", {icon} }
            }
            input {
                class: "search-bar-input",
                r#type: "search",
                placeholder: placeholder,
                value: value,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
