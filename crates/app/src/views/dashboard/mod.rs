mod admin;
mod operations;
mod placeholder;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdTrendingDown, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{ContentView, LoadStatus, QuickAction, StatCard, TaskPriority, Trend, TruckState};
use shared_ui::{
    BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle,
};

use crate::icons::GlyphIcon;
use crate::session::use_session;

use placeholder::PlaceholderView;

/// Main area: the role's dashboard or a placeholder for the active module.
#[component]
pub fn ContentPanel() -> Element {
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        match session.content() {
            ContentView::AdminDashboard => rsx! { admin::AdminDashboard {} },
            ContentView::OperationsDashboard => rsx! { operations::OperationsDashboard {} },
            ContentView::Placeholder { title } => rsx! { PlaceholderView { title } },
        }
    }
}

pub(crate) fn load_status_variant(status: LoadStatus) -> BadgeVariant {
    match status {
        LoadStatus::Delivered => BadgeVariant::Success,
        LoadStatus::InTransit => BadgeVariant::Primary,
        LoadStatus::Loaded => BadgeVariant::Warning,
    }
}

pub(crate) fn truck_state_variant(state: TruckState) -> BadgeVariant {
    match state {
        TruckState::InTransit => BadgeVariant::Primary,
        TruckState::Loading => BadgeVariant::Warning,
        TruckState::Available => BadgeVariant::Success,
        TruckState::Maintenance => BadgeVariant::Destructive,
    }
}

pub(crate) fn priority_variant(priority: TaskPriority) -> BadgeVariant {
    match priority {
        TaskPriority::High => BadgeVariant::Destructive,
        TaskPriority::Medium => BadgeVariant::Warning,
        TaskPriority::Low => BadgeVariant::Secondary,
    }
}

/// Text colour class for a stat card's detail line.
pub(crate) fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend-up",
        Trend::Down => "trend-down",
        Trend::Stable => "trend-stable",
    }
}

/// Row of headline metric cards.
#[component]
fn StatGrid(stats: Vec<StatCard>) -> Element {
    rsx! {
        div { class: "stat-grid",
            for stat in stats {
                StatTile { key: "{stat.title}", stat: stat.clone() }
            }
        }
    }
}

#[component]
fn StatTile(stat: StatCard) -> Element {
    rsx! {
        Card { class: "stat-tile",
            CardHeader { class: "stat-tile-header",
                CardTitle { class: "stat-tile-title", "{stat.title}" }
                span { class: "stat-tile-icon",
                    GlyphIcon { glyph: stat.glyph, size: 16 }
                }
            }
            CardContent {
                p { class: "stat-tile-value", "{stat.value}" }
                p { class: "stat-tile-detail {trend_class(stat.trend)}",
                    match stat.trend {
                        Trend::Up => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 12, height: 12 } },
                        Trend::Down => rsx! { Icon::<LdTrendingDown> { icon: LdTrendingDown, width: 12, height: 12 } },
                        Trend::Stable => rsx! {},
                    }
                    "{stat.detail}"
                }
            }
        }
    }
}

/// Card of shortcut buttons; the first one is highlighted. None are wired yet.
#[component]
fn QuickActionGrid(description: &'static str, actions: Vec<QuickAction>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Quick Actions" }
                CardDescription { "{description}" }
            }
            CardContent {
                div { class: "quick-action-grid",
                    for (index, action) in actions.into_iter().enumerate() {
                        Button {
                            key: "{action.label}",
                            variant: if index == 0 { ButtonVariant::Primary } else { ButtonVariant::Outline },
                            class: "quick-action",
                            GlyphIcon { glyph: action.glyph, size: 24 }
                            span { "{action.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_status_badges() {
        assert_eq!(load_status_variant(LoadStatus::Delivered), BadgeVariant::Success);
        assert_eq!(load_status_variant(LoadStatus::InTransit), BadgeVariant::Primary);
        assert_eq!(load_status_variant(LoadStatus::Loaded), BadgeVariant::Warning);
    }

    #[test]
    fn truck_state_badges() {
        assert_eq!(truck_state_variant(TruckState::InTransit), BadgeVariant::Primary);
        assert_eq!(truck_state_variant(TruckState::Loading), BadgeVariant::Warning);
        assert_eq!(truck_state_variant(TruckState::Available), BadgeVariant::Success);
        assert_eq!(truck_state_variant(TruckState::Maintenance), BadgeVariant::Destructive);
    }

    #[test]
    fn high_priority_is_destructive() {
        assert_eq!(priority_variant(TaskPriority::High), BadgeVariant::Destructive);
        assert_eq!(priority_variant(TaskPriority::Medium), BadgeVariant::Warning);
        assert_eq!(priority_variant(TaskPriority::Low), BadgeVariant::Secondary);
    }

    #[test]
    fn trend_classes_are_distinct() {
        assert_eq!(trend_class(Trend::Up), "trend-up");
        assert_ne!(trend_class(Trend::Up), trend_class(Trend::Down));
        assert_eq!(trend_class(Trend::Stable), "trend-stable");
    }
}
