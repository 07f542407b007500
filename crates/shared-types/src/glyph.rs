use serde::{Deserialize, Serialize};

/// Icon identifiers referenced by menus and dashboard records.
///
/// Kept UI-agnostic here; the app maps each glyph to a concrete icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Dashboard,
    Truck,
    Building,
    DriverBadge,
    Package,
    Money,
    Chart,
    Users,
    MapPin,
    Trend,
    Settings,
    Fuel,
    Document,
    Receipt,
    Calendar,
}
