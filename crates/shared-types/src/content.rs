use crate::{Role, DEFAULT_ITEM};

/// Title used for any id missing from the title table.
pub const FALLBACK_TITLE: &str = "Dashboard";

/// The panel rendered in the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    AdminDashboard,
    OperationsDashboard,
    /// "Under construction" panel for modules that have no view yet.
    Placeholder { title: &'static str },
}

const TITLES: &[(&str, &str)] = &[
    ("trucks", "Truck Management"),
    ("vendors", "Vendor Management"),
    ("drivers", "Driver Management"),
    ("loads", "Load Management"),
    ("finances", "Financial Reports"),
    ("analytics", "Analytics & Reports"),
    ("users", "User Management"),
    ("locations", "Location Management"),
    ("rates", "Rate Management"),
    ("fuel", "Fuel Management"),
    ("billty", "Billty Management"),
    ("expenses", "Expense Tracking"),
    ("reports", "Basic Reports"),
    ("settings", "System Settings"),
];

/// Module title for a non-dashboard menu id. Unknown ids get [`FALLBACK_TITLE`].
pub fn module_title(active_item: &str) -> &'static str {
    TITLES
        .iter()
        .find(|(id, _)| *id == active_item)
        .map(|(_, title)| *title)
        .unwrap_or(FALLBACK_TITLE)
}

/// Select the panel for `active_item`. Total over all inputs.
pub fn resolve_content(active_item: &str, role: Role) -> ContentView {
    if active_item == DEFAULT_ITEM {
        return match role {
            Role::Admin => ContentView::AdminDashboard,
            Role::SubAdmin => ContentView::OperationsDashboard,
        };
    }
    ContentView::Placeholder {
        title: module_title(active_item),
    }
}

/// Header title for the current selection.
pub fn page_title(active_item: &str, role: Role) -> &'static str {
    match resolve_content(active_item, role) {
        ContentView::AdminDashboard => "Admin Dashboard",
        ContentView::OperationsDashboard => "Operations Dashboard",
        ContentView::Placeholder { title } => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{menu_for, ALL_ROLES};
    use pretty_assertions::assert_eq;

    #[test]
    fn dashboard_resolves_per_role() {
        assert_eq!(resolve_content("dashboard", Role::Admin), ContentView::AdminDashboard);
        assert_eq!(
            resolve_content("dashboard", Role::SubAdmin),
            ContentView::OperationsDashboard
        );
        assert_ne!(
            resolve_content("dashboard", Role::Admin),
            resolve_content("dashboard", Role::SubAdmin)
        );
    }

    #[test]
    fn trucks_resolves_to_truck_management_placeholder() {
        for role in ALL_ROLES {
            assert_eq!(
                resolve_content("trucks", *role),
                ContentView::Placeholder {
                    title: "Truck Management"
                }
            );
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_dashboard_title() {
        for id in ["", "Dashboard", "no-such-module", "trucks "] {
            assert_eq!(
                resolve_content(id, Role::Admin),
                ContentView::Placeholder { title: FALLBACK_TITLE }
            );
        }
    }

    #[test]
    fn ids_outside_role_menu_still_resolve() {
        assert_eq!(
            resolve_content("billty", Role::Admin),
            ContentView::Placeholder {
                title: "Billty Management"
            }
        );
    }

    #[test]
    fn every_menu_item_has_a_title() {
        for role in ALL_ROLES {
            for item in menu_for(*role).iter().filter(|i| i.id != DEFAULT_ITEM) {
                assert_ne!(module_title(item.id), FALLBACK_TITLE, "{}", item.id);
            }
        }
    }

    #[test]
    fn page_title_tracks_content() {
        assert_eq!(page_title("dashboard", Role::Admin), "Admin Dashboard");
        assert_eq!(page_title("dashboard", Role::SubAdmin), "Operations Dashboard");
        assert_eq!(page_title("expenses", Role::SubAdmin), "Expense Tracking");
        assert_eq!(page_title("unknown", Role::SubAdmin), "Dashboard");
    }
}
