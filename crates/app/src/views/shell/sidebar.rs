use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdLogOut, LdShield, LdTruck};
use dioxus_free_icons::Icon;
use shared_types::{menu_for, Role};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Separator, Sidebar, SidebarContent, SidebarFooter,
    SidebarHeader, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarTrigger,
};

use super::sign_out;
use crate::icons::GlyphIcon;
use crate::session::use_session;

#[component]
pub fn PortalSidebar() -> Element {
    let mut session = use_session();
    let toasts = use_toast();

    let role = session.role();
    let collapsed = session.sidebar_collapsed();
    let active = session.active_item();
    let role_badge = match role {
        Role::Admin => BadgeVariant::Primary,
        Role::SubAdmin => BadgeVariant::Secondary,
    };

    rsx! {
        Sidebar { collapsed,
            SidebarHeader {
                if !collapsed {
                    div { class: "brand",
                        div { class: "brand-logo",
                            Icon::<LdTruck> { icon: LdTruck, width: 22, height: 22 }
                        }
                        div {
                            p { class: "brand-name", "Transport" }
                            p { class: "brand-tagline", "Management System" }
                        }
                    }
                }
                SidebarTrigger {
                    onclick: move |_| session.toggle_sidebar(),
                    Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                }
            }

            if !collapsed {
                div { class: "sidebar-user",
                    div { class: "sidebar-user-avatar",
                        Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                    }
                    div { class: "sidebar-user-info",
                        p { class: "sidebar-user-name", "{role.profile_name()}" }
                        Badge { variant: role_badge, "{role.badge_label()}" }
                    }
                }
            }

            Separator {}

            SidebarContent {
                SidebarMenu {
                    for item in menu_for(role).iter() {
                        SidebarMenuItem { key: "{item.id}",
                            SidebarMenuButton {
                                active: active == item.id,
                                title: item.label,
                                onclick: move |_| {
                                    session.select_item(item.id);
                                },
                                GlyphIcon { glyph: item.glyph, size: 20 }
                                span { class: "sidebar-label", "{item.label}" }
                            }
                        }
                    }
                }
            }

            Separator {}

            SidebarFooter {
                SidebarMenuButton {
                    class: "sidebar-signout",
                    title: "Sign Out",
                    onclick: move |_| sign_out(session, toasts),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 }
                    span { class: "sidebar-label", "Sign Out" }
                }
            }
        }
    }
}
