use dioxus::prelude::*;

/// Prepend the part's base class to caller attributes.
fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered panel holding a stat tile, a dashboard section or the login form.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attributes = with_class("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..attributes, {children} }
    }
}

/// Title row of a card. Lays its children out in a row, title first.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attributes = with_class("card-header", attributes);

    rsx! {
        div { ..attributes, {children} }
    }
}

/// Section heading, e.g. "Recent Loads".
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attributes = with_class("card-title", attributes);

    rsx! {
        h3 { ..attributes, {children} }
    }
}

/// Muted line under the title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attributes = with_class("card-description", attributes);

    rsx! {
        p { ..attributes, {children} }
    }
}

/// Body of the card: record lists, forms, action grids.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attributes = with_class("card-content", attributes);

    rsx! {
        div { ..attributes, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_class_comes_first() {
        let merged = with_class("card", Vec::new());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "class");
    }
}
