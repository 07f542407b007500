use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCheck, LdClock, LdFlag, LdLogOut, LdMenu, LdSearch, LdSettings, LdTruck, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::{ActivityKind, Notification};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, SearchBar,
    Switch, SwitchThumb,
};
use shared_ui::theme::{ThemeMode, ThemeState};

use super::sign_out;
use crate::session::use_session;
use crate::use_data_source;

/// Top bar: page title, search, quick stats, notifications, profile menu.
#[component]
pub fn PortalHeader() -> Element {
    let mut session = use_session();
    let toasts = use_toast();
    let summary = use_data_source().get().header_summary();
    let mut query = use_signal(String::new);
    let mut theme = use_context::<ThemeState>();

    let role = session.role();
    let unread = summary.notifications.len();

    rsx! {
        header { class: "portal-header",
            div { class: "portal-header-left",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "icon-button portal-menu-toggle",
                    title: "Toggle sidebar",
                    onclick: move |_| session.toggle_sidebar(),
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
                div {
                    h1 { class: "portal-title", "{session.page_title()}" }
                    p { class: "portal-subtitle", "{role.panel_subtitle()}" }
                }
            }

            div { class: "portal-header-right",
                SearchBar {
                    placeholder: "Search trucks, loads, drivers...",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                    icon: rsx! { Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 } },
                }

                div { class: "quick-stats",
                    span { class: "quick-stat quick-stat-ok",
                        Icon::<LdTruck> { icon: LdTruck, width: 16, height: 16 }
                        "{summary.active_trucks} Active"
                    }
                    span { class: "quick-stat quick-stat-warn",
                        Icon::<LdFlag> { icon: LdFlag, width: 16, height: 16 }
                        "{summary.open_issues} Issues"
                    }
                }

                DropdownMenu {
                    DropdownMenuTrigger {
                        span { class: "notification-bell",
                            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                            if unread > 0 {
                                Badge { variant: BadgeVariant::Destructive, class: "notification-count", "{unread}" }
                            }
                        }
                    }
                    DropdownMenuContent { class: "notification-menu",
                        DropdownMenuLabel {
                            div { class: "notification-menu-label",
                                "Notifications"
                                Badge { variant: BadgeVariant::Secondary, "{unread} new" }
                            }
                        }
                        DropdownMenuSeparator {}
                        for (index, note) in summary.notifications.iter().enumerate() {
                            DropdownMenuItem::<u32> {
                                key: "{note.id}",
                                value: note.id,
                                index,
                                on_select: move |id: u32| tracing::debug!(id, "notification opened"),
                                NotificationRow { notification: note.clone() }
                            }
                        }
                        DropdownMenuSeparator {}
                        DropdownMenuItem::<u32> {
                            value: 0u32,
                            index: unread,
                            on_select: move |_: u32| tracing::debug!("all notifications requested"),
                            span { class: "notification-view-all", "View all notifications" }
                        }
                    }
                }

                DropdownMenu {
                    DropdownMenuTrigger {
                        span { class: "profile-trigger",
                            span { class: "profile-avatar",
                                Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                            }
                            span { class: "profile-role", "{role.short_label()}" }
                        }
                    }
                    DropdownMenuContent { class: "profile-menu",
                        DropdownMenuLabel {
                            p { class: "profile-name", "{role.full_title()}" }
                            p { class: "profile-email", "{role.contact_email()}" }
                        }
                        DropdownMenuSeparator {}
                        DropdownMenuItem::<String> {
                            value: "profile".to_string(),
                            on_select: move |item: String| tracing::debug!(item = %item, "profile menu item selected"),
                            index: 0usize,
                            span { class: "menu-row",
                                Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                                "Profile Settings"
                            }
                        }
                        DropdownMenuItem::<String> {
                            value: "preferences".to_string(),
                            on_select: move |item: String| tracing::debug!(item = %item, "profile menu item selected"),
                            index: 1usize,
                            span { class: "menu-row",
                                Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                                "Preferences"
                            }
                        }
                        div { class: "menu-row menu-row-switch",
                            span { "Dark mode" }
                            Switch {
                                checked: Some(theme.mode().is_dark()),
                                on_checked_change: move |val: bool| theme.set_mode(ThemeMode::from_dark(val)),
                                SwitchThumb {}
                            }
                        }
                        DropdownMenuSeparator {}
                        DropdownMenuItem::<String> {
                            value: "logout".to_string(),
                            index: 2usize,
                            on_select: move |_: String| sign_out(session, toasts),
                            span { class: "menu-row menu-row-danger",
                                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                                "Sign Out"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationRow(notification: Notification) -> Element {
    let tone = match notification.kind {
        ActivityKind::Success => "tone-success",
        ActivityKind::Warning => "tone-warning",
        ActivityKind::Info => "tone-info",
    };

    rsx! {
        div { class: "notification-row",
            span { class: "notification-icon {tone}",
                match notification.kind {
                    ActivityKind::Success => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } },
                    ActivityKind::Warning => rsx! { Icon::<LdFlag> { icon: LdFlag, width: 16, height: 16 } },
                    ActivityKind::Info => rsx! { Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } },
                }
            }
            div {
                p { class: "notification-title", "{notification.title}" }
                p { class: "notification-time", "{notification.time}" }
            }
        }
    }
}
