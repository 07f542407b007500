use crate::{credentials, is_menu_item, resolve_content, page_title, AppError, ContentView, Role, DEFAULT_ITEM};

/// Observable authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Role),
}

/// User-facing outcome of a successful transition, rendered as a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SignedIn(Role),
    SignedOut,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::SignedIn(_) => "Login Successful",
            Notice::SignedOut => "Logged Out",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::SignedIn(role) => format!("Welcome back, {}!", role.welcome_name()),
            Notice::SignedOut => "You have been successfully logged out.".to_string(),
        }
    }
}

/// In-memory session for the current page lifetime.
///
/// Fields are private: every mutation goes through a named transition so
/// `active_item` always belongs to the menu of `role`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    role: Role,
    active_item: String,
    sidebar_collapsed: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh, logged-out session.
    pub fn new() -> Self {
        Self {
            authenticated: false,
            role: Role::default(),
            active_item: DEFAULT_ITEM.to_string(),
            sidebar_collapsed: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.authenticated {
            SessionState::LoggedIn(self.role)
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_item(&self) -> &str {
        &self.active_item
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Panel for the current selection.
    pub fn content(&self) -> ContentView {
        resolve_content(&self.active_item, self.role)
    }

    /// Header title for the current selection.
    pub fn page_title(&self) -> &'static str {
        page_title(&self.active_item, self.role)
    }

    /// Check `email`/`password` against the table entry for `role` and commit.
    pub fn login(&mut self, role: Role, email: &str, password: &str) -> Result<Notice, AppError> {
        self.apply_login(role, credentials::authenticate(role, email, password))
    }

    /// Commit the verdict of a (possibly deferred) credential check.
    ///
    /// A failed verdict leaves the session untouched. A login while already
    /// signed in keeps the existing role and selection.
    pub fn apply_login(
        &mut self,
        role: Role,
        verdict: Result<Role, AppError>,
    ) -> Result<Notice, AppError> {
        if self.authenticated {
            tracing::warn!(current = %self.role, requested = %role, "login ignored: already signed in");
            return Ok(Notice::SignedIn(self.role));
        }

        match verdict {
            Ok(granted) if granted == role => {
                self.authenticated = true;
                self.role = role;
                self.active_item = DEFAULT_ITEM.to_string();
                tracing::info!(role = %role, "signed in");
                Ok(Notice::SignedIn(role))
            }
            Ok(granted) => {
                tracing::warn!(requested = %role, granted = %granted, "login verdict for a different role");
                Err(AppError::invalid_credentials())
            }
            Err(err) => {
                tracing::debug!(role = %role, error = %err, "login rejected");
                Err(err)
            }
        }
    }

    /// Return to the logged-out state with role and selection reset.
    pub fn logout(&mut self) -> Notice {
        if self.authenticated {
            tracing::info!(role = %self.role, "signed out");
        }
        self.authenticated = false;
        self.role = Role::default();
        self.active_item = DEFAULT_ITEM.to_string();
        Notice::SignedOut
    }

    /// Make `id` the active menu entry. Returns false, leaving the selection
    /// as it was, when logged out or when `id` is not in the role's menu.
    pub fn select_item(&mut self, id: &str) -> bool {
        if !self.authenticated || !is_menu_item(self.role, id) {
            tracing::warn!(role = %self.role, item = id, "ignored selection outside the menu");
            return false;
        }
        if self.active_item != id {
            self.active_item = id.to_string();
        }
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
