mod header;
mod sidebar;

use dioxus::prelude::*;
use shared_ui::{SidebarInset, SidebarProvider, Toasts};

use super::dashboard::ContentPanel;
use crate::notify;
use crate::session::{use_session, SessionHandle};

/// Signed-in layout: sidebar, header, and the content panel.
#[component]
pub fn Shell() -> Element {
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }
        SidebarProvider { collapsed: session.sidebar_collapsed(),
            sidebar::PortalSidebar {}
            SidebarInset {
                header::PortalHeader {}
                main { class: "portal-main",
                    ContentPanel {}
                }
            }
        }
    }
}

/// Shared by the sidebar footer and the profile dropdown.
fn sign_out(mut session: SessionHandle, toasts: Toasts) {
    let notice = session.logout();
    notify::show(toasts, notify::notice_message(&notice));
}
