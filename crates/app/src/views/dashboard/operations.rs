use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdClock, LdFlag, LdInfo, LdTruck};
use dioxus_free_icons::Icon;
use shared_types::{Activity, ActivityKind, PendingTask, TruckStatus};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, PageSubtitle, PageTitle,
};

use super::{priority_variant, truck_state_variant, QuickActionGrid, StatGrid};
use crate::use_data_source;

/// Day-to-day view for sub-admins: tasks, activity and fleet status.
#[component]
pub fn OperationsDashboard() -> Element {
    let overview = use_data_source().get().operations_overview();

    rsx! {
        div { class: "dashboard operations-dashboard",
            PageHeader {
                div {
                    PageTitle { "Operations Dashboard" }
                    PageSubtitle { "Manage daily operations and track load assignments" }
                }
            }

            StatGrid { stats: overview.stats.clone() }

            div { class: "dashboard-columns dashboard-halves",
                Card {
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdFlag> { icon: LdFlag, width: 20, height: 20 }
                            "Pending Tasks"
                        }
                        CardDescription { "Tasks requiring immediate attention" }
                    }
                    CardContent {
                        div { class: "record-list",
                            for task in overview.pending_tasks.iter() {
                                TaskRow { key: "{task.id}", task: task.clone() }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, class: "record-list-more", "View All Tasks" }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                            "Recent Activities"
                        }
                        CardDescription { "Your recent actions and system updates" }
                    }
                    CardContent {
                        div { class: "record-list",
                            for (index, activity) in overview.activities.iter().enumerate() {
                                ActivityRow { key: "{index}", activity: activity.clone() }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, class: "record-list-more", "View Activity Log" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { class: "card-title-icon",
                        Icon::<LdTruck> { icon: LdTruck, width: 20, height: 20 }
                        "Truck Status Overview"
                    }
                    CardDescription { "Current status of trucks in your fleet" }
                }
                CardContent {
                    div { class: "truck-grid",
                        for truck in overview.trucks.iter() {
                            TruckRow { key: "{truck.truck}", truck: truck.clone() }
                        }
                    }
                }
            }

            QuickActionGrid {
                description: "Frequently used operational functions",
                actions: overview.quick_actions.clone(),
            }
        }
    }
}

#[component]
fn TaskRow(task: PendingTask) -> Element {
    rsx! {
        div { class: "record-row",
            div { class: "record-main",
                div { class: "record-heading",
                    span { class: "record-text", "{task.task}" }
                    Badge { variant: priority_variant(task.priority), "{task.priority.label()}" }
                }
                p { class: "record-meta", "{task.vendor}" }
                p { class: "record-time", "Due in {task.due}" }
            }
            Button { variant: ButtonVariant::Outline, class: "record-action", "Action" }
        }
    }
}

#[component]
fn ActivityRow(activity: Activity) -> Element {
    rsx! {
        div { class: "record-row record-row-start",
            match activity.kind {
                ActivityKind::Success => rsx! {
                    span { class: "tone-success", Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } }
                },
                ActivityKind::Warning => rsx! {
                    span { class: "tone-warning", Icon::<LdFlag> { icon: LdFlag, width: 16, height: 16 } }
                },
                ActivityKind::Info => rsx! {
                    span { class: "tone-info", Icon::<LdInfo> { icon: LdInfo, width: 16, height: 16 } }
                },
            }
            div { class: "record-main",
                p { class: "record-text", "{activity.action}" }
                p { class: "record-time", "by {activity.actor} • {activity.time}" }
            }
        }
    }
}

#[component]
fn TruckRow(truck: TruckStatus) -> Element {
    rsx! {
        div { class: "record-row",
            div { class: "record-main",
                div { class: "record-heading",
                    span { class: "record-id", "{truck.truck}" }
                    Badge { variant: truck_state_variant(truck.state), "{truck.state.label()}" }
                }
                p { class: "record-meta", "Driver: {truck.driver}" }
                if let Some(route) = &truck.route {
                    p { class: "record-meta", "Route: {route}" }
                }
            }
            if let Some(eta) = &truck.eta {
                p { class: "record-time", "ETA: {eta}" }
            }
        }
    }
}
