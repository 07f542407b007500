use dioxus::prelude::*;
use shared_types::{AppError, ContentView, Notice, Role, Session};

/// Owner of the portal session for the page lifetime.
///
/// Views read through the accessors; every mutation is one of the named
/// transitions on [`Session`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionHandle {
    session: Signal<Session>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn role(&self) -> Role {
        self.session.read().role()
    }

    pub fn active_item(&self) -> String {
        self.session.read().active_item().to_string()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.session.read().sidebar_collapsed()
    }

    pub fn content(&self) -> ContentView {
        self.session.read().content()
    }

    pub fn page_title(&self) -> &'static str {
        self.session.read().page_title()
    }

    /// Commit the verdict returned by the login server function.
    pub fn commit_login(
        &mut self,
        role: Role,
        verdict: Result<Role, AppError>,
    ) -> Result<Notice, AppError> {
        self.session.write().apply_login(role, verdict)
    }

    pub fn logout(&mut self) -> Notice {
        self.session.write().logout()
    }

    pub fn select_item(&mut self, id: &str) -> bool {
        self.session.write().select_item(id)
    }

    pub fn toggle_sidebar(&mut self) {
        self.session.write().toggle_sidebar();
    }
}

/// Hook to access the session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
