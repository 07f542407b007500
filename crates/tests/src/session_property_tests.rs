use pretty_assertions::assert_eq;
use shared_types::{
    menu_for, resolve_content, ContentView, Role, Session, SessionState, ALL_ROLES, DEFAULT_ITEM,
};

use crate::common::signed_in;

#[tokio::test]
async fn logout_resets_selection_for_every_menu_item() {
    for role in ALL_ROLES {
        for item in menu_for(*role) {
            let mut session = signed_in(*role).await;
            session.toggle_sidebar();
            assert!(session.select_item(item.id));

            session.logout();

            assert_eq!(session.state(), SessionState::LoggedOut);
            assert_eq!(session.active_item(), DEFAULT_ITEM);
            assert_eq!(session.role(), Role::Admin);
        }
    }
}

#[tokio::test]
async fn toggle_sidebar_twice_is_identity() {
    let mut session = signed_in(Role::Admin).await;
    session.select_item("vendors");
    let before = session.clone();

    session.toggle_sidebar();
    assert_ne!(session, before);
    session.toggle_sidebar();
    assert_eq!(session, before);
}

#[test]
fn dashboards_differ_by_role() {
    assert_ne!(
        resolve_content("dashboard", Role::Admin),
        resolve_content("dashboard", Role::SubAdmin)
    );
}

#[test]
fn unknown_ids_fall_back_to_placeholder() {
    for id in ["", "nope", "DASHBOARD", "trucks "] {
        for role in ALL_ROLES {
            assert!(matches!(
                resolve_content(id, *role),
                ContentView::Placeholder { .. }
            ));
        }
    }
}

#[tokio::test]
async fn sub_admin_cannot_select_admin_only_items() {
    let mut session = signed_in(Role::SubAdmin).await;

    assert!(!session.select_item("users"));
    assert_eq!(session.active_item(), DEFAULT_ITEM);
    assert_eq!(session.content(), ContentView::OperationsDashboard);
}

#[test]
fn selection_is_ignored_while_logged_out() {
    let mut session = Session::new();
    assert!(!session.select_item("trucks"));
    assert_eq!(session.active_item(), DEFAULT_ITEM);
}
