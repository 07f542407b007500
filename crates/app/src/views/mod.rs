mod dashboard;
mod login;
mod shell;

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::use_toast;

use crate::notify;
use crate::session::use_session;
use login::{LoginFuture, LoginRequest};

/// Login card while signed out, the dashboard shell once signed in.
///
/// Owns the login step: the submitted pair is checked by the `login` server
/// function, then the verdict is committed to the session and announced.
#[component]
pub fn PortalRoot() -> Element {
    let session = use_session();
    let toasts = use_toast();

    let on_login = use_callback(move |request: LoginRequest| -> LoginFuture {
        let mut session = session;
        Box::pin(async move {
            let LoginRequest {
                email,
                password,
                role,
            } = request;
            let verdict = server::api::login(email, password, role)
                .await
                .map_err(|e| AppError::from_server_error_or_internal(&e.to_string()));

            let outcome = session.commit_login(role, verdict);
            notify::show(toasts, notify::login_outcome(&outcome));
        })
    });

    if session.is_authenticated() {
        rsx! { shell::Shell {} }
    } else {
        rsx! { login::LoginView { on_login } }
    }
}
