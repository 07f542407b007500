use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ContentView, Notice, Role, Session, SessionState};

use crate::common::{instant_login, signed_in, submit_login};

#[tokio::test]
async fn admin_signs_in_to_admin_dashboard() {
    let mut session = Session::new();
    let notice = submit_login(
        &mut session,
        &instant_login(),
        Role::Admin,
        "admin@transport.com",
        "admin123",
    )
    .await;

    assert_eq!(notice, Ok(Notice::SignedIn(Role::Admin)));
    assert_eq!(session.state(), SessionState::LoggedIn(Role::Admin));
    assert_eq!(session.content(), ContentView::AdminDashboard);
    assert_eq!(session.page_title(), "Admin Dashboard");
}

#[tokio::test]
async fn wrong_password_stays_logged_out() {
    let mut session = Session::new();
    let before = session.clone();

    let result = submit_login(
        &mut session,
        &instant_login(),
        Role::Admin,
        "admin@transport.com",
        "wrongpass",
    )
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
    assert_eq!(session, before);
    assert_eq!(session.state(), SessionState::LoggedOut);
}

#[tokio::test]
async fn sub_admin_signs_in_to_operations_dashboard() {
    let mut session = Session::new();
    let notice = submit_login(
        &mut session,
        &instant_login(),
        Role::SubAdmin,
        "subadmin@transport.com",
        "sub123",
    )
    .await;

    assert_eq!(notice, Ok(Notice::SignedIn(Role::SubAdmin)));
    assert_eq!(session.state(), SessionState::LoggedIn(Role::SubAdmin));
    assert_eq!(session.content(), ContentView::OperationsDashboard);
    assert_eq!(session.page_title(), "Operations Dashboard");
}

#[tokio::test]
async fn selecting_trucks_shows_truck_management_placeholder() {
    let mut session = signed_in(Role::Admin).await;

    assert!(session.select_item("trucks"));
    assert_eq!(
        session.content(),
        ContentView::Placeholder {
            title: "Truck Management"
        }
    );
    assert_eq!(session.page_title(), "Truck Management");
}

#[tokio::test]
async fn swapped_role_is_rejected() {
    let mut session = Session::new();
    let result = submit_login(
        &mut session,
        &instant_login(),
        Role::SubAdmin,
        "admin@transport.com",
        "admin123",
    )
    .await;

    assert!(result.is_err());
    assert_eq!(session.state(), SessionState::LoggedOut);
}

#[tokio::test]
async fn email_is_case_sensitive() {
    let mut session = Session::new();
    let result = submit_login(
        &mut session,
        &instant_login(),
        Role::Admin,
        "Admin@transport.com",
        "admin123",
    )
    .await;

    assert!(result.is_err());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn sign_out_notice_after_login() {
    let mut session = signed_in(Role::SubAdmin).await;
    let notice = session.logout();

    assert_eq!(notice, Notice::SignedOut);
    assert_eq!(notice.title(), "Logged Out");
    assert_eq!(session.state(), SessionState::LoggedOut);
}
