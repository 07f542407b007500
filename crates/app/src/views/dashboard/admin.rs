use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFlag, LdInfo, LdMoon, LdPackage, LdSiren, LdSun};
use dioxus_free_icons::Icon;
use shared_types::{Alert, AlertLevel, LoadRecord};
use shared_ui::theme::ThemeMode;
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageActions, PageHeader, PageSubtitle, PageTitle,
};

use super::{load_status_variant, QuickActionGrid, StatGrid};
use crate::use_data_source;

/// Full business overview for administrators.
///
/// Carries its own dark/light display toggle, scoped to this panel and
/// separate from the portal-wide theme preference.
#[component]
pub fn AdminDashboard() -> Element {
    let overview = use_data_source().get().admin_overview();
    let mut display = use_signal(|| ThemeMode::Dark);

    rsx! {
        div { class: "dashboard admin-dashboard", "data-theme": display().as_str(),
            PageHeader {
                div {
                    PageTitle { "Admin Dashboard" }
                    PageSubtitle { "Complete overview of your transport business operations" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "icon-button",
                        title: "Toggle display mode",
                        onclick: move |_| {
                            let next = display().toggled();
                            display.set(next);
                        },
                        if display().is_dark() {
                            Icon::<LdSun> { icon: LdSun, width: 20, height: 20 }
                        } else {
                            Icon::<LdMoon> { icon: LdMoon, width: 20, height: 20 }
                        }
                    }
                }
            }

            StatGrid { stats: overview.stats.clone() }

            div { class: "dashboard-columns",
                Card { class: "dashboard-wide",
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdPackage> { icon: LdPackage, width: 20, height: 20 }
                            "Recent Loads"
                        }
                        CardDescription { "Latest load assignments and their current status" }
                    }
                    CardContent {
                        div { class: "record-list",
                            for load in overview.recent_loads.iter() {
                                LoadRow { key: "{load.id}", load: load.clone() }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, class: "record-list-more", "View All Loads" }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdFlag> { icon: LdFlag, width: 20, height: 20 }
                            "Alerts & Notifications"
                        }
                        CardDescription { "Important updates requiring attention" }
                    }
                    CardContent {
                        div { class: "record-list",
                            for (index, alert) in overview.alerts.iter().enumerate() {
                                AlertRow { key: "{index}", alert: alert.clone() }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, class: "record-list-more", "View All Alerts" }
                    }
                }
            }

            QuickActionGrid {
                description: "Frequently used administrative functions",
                actions: overview.quick_actions.clone(),
            }
        }
    }
}

#[component]
fn LoadRow(load: LoadRecord) -> Element {
    rsx! {
        div { class: "record-row",
            div { class: "record-main",
                div { class: "record-heading",
                    span { class: "record-id", "{load.id}" }
                    Badge { variant: load_status_variant(load.status), "{load.status.label()}" }
                }
                p { class: "record-meta", "{load.vendor} • {load.route}" }
                p { class: "record-meta", "{load.truck} • {load.driver}" }
            }
            p { class: "record-amount", "{load.amount}" }
        }
    }
}

#[component]
fn AlertRow(alert: Alert) -> Element {
    rsx! {
        div { class: "record-row record-row-start",
            match alert.level {
                AlertLevel::Critical => rsx! {
                    span { class: "tone-destructive", Icon::<LdSiren> { icon: LdSiren, width: 16, height: 16 } }
                },
                AlertLevel::Warning => rsx! {
                    span { class: "tone-warning", Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } }
                },
                AlertLevel::Info => rsx! {
                    span { class: "tone-info", Icon::<LdInfo> { icon: LdInfo, width: 16, height: 16 } }
                },
            }
            div { class: "record-main",
                p { class: "record-text", "{alert.message}" }
                p { class: "record-time", "{alert.time}" }
            }
        }
    }
}
