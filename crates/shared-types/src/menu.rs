use crate::{Glyph, Role};

/// Id of the menu entry every role starts on.
pub const DEFAULT_ITEM: &str = "dashboard";

/// A sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
}

const fn item(id: &'static str, label: &'static str, glyph: Glyph) -> MenuItem {
    MenuItem { id, label, glyph }
}

pub const ADMIN_MENU: &[MenuItem] = &[
    item("dashboard", "Dashboard", Glyph::Dashboard),
    item("trucks", "Truck Management", Glyph::Truck),
    item("vendors", "Vendor Management", Glyph::Building),
    item("drivers", "Driver Management", Glyph::DriverBadge),
    item("loads", "Load Management", Glyph::Package),
    item("finances", "Financial Reports", Glyph::Money),
    item("analytics", "Analytics & Reports", Glyph::Chart),
    item("users", "User Management", Glyph::Users),
    item("locations", "Location Management", Glyph::MapPin),
    item("rates", "Rate Management", Glyph::Trend),
    item("settings", "System Settings", Glyph::Settings),
];

pub const SUB_ADMIN_MENU: &[MenuItem] = &[
    item("dashboard", "Dashboard", Glyph::Dashboard),
    item("loads", "Load Management", Glyph::Package),
    item("trucks", "Truck & Fuel", Glyph::Truck),
    item("drivers", "Driver Management", Glyph::DriverBadge),
    item("vendors", "Vendor Management", Glyph::Building),
    item("fuel", "Fuel Management", Glyph::Fuel),
    item("billty", "Billty Management", Glyph::Document),
    item("expenses", "Expense Tracking", Glyph::Receipt),
    item("reports", "Basic Reports", Glyph::Chart),
];

/// The ordered menu shown to `role`.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::SubAdmin => SUB_ADMIN_MENU,
    }
}

/// Whether `id` names an entry in the menu for `role`.
pub fn is_menu_item(role: Role, id: &str) -> bool {
    menu_for(role).iter().any(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_ROLES;
    use std::collections::HashSet;

    #[test]
    fn every_menu_starts_with_the_default_item() {
        for role in ALL_ROLES {
            assert_eq!(menu_for(*role).first().map(|i| i.id), Some(DEFAULT_ITEM));
        }
    }

    #[test]
    fn menu_ids_are_unique() {
        for role in ALL_ROLES {
            let ids: HashSet<_> = menu_for(*role).iter().map(|i| i.id).collect();
            assert_eq!(ids.len(), menu_for(*role).len());
        }
    }

    #[test]
    fn menus_differ_by_role() {
        assert!(is_menu_item(Role::Admin, "settings"));
        assert!(!is_menu_item(Role::SubAdmin, "settings"));
        assert!(is_menu_item(Role::SubAdmin, "billty"));
        assert!(!is_menu_item(Role::Admin, "billty"));
    }

    #[test]
    fn shared_ids_keep_role_specific_labels() {
        let label = |role| {
            menu_for(role)
                .iter()
                .find(|i| i.id == "trucks")
                .map(|i| i.label)
        };
        assert_eq!(label(Role::Admin), Some("Truck Management"));
        assert_eq!(label(Role::SubAdmin), Some("Truck & Fuel"));
    }

    #[test]
    fn unknown_ids_are_not_members() {
        assert!(!is_menu_item(Role::Admin, ""));
        assert!(!is_menu_item(Role::Admin, "Dashboard"));
    }
}
