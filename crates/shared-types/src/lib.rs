pub mod error;
pub mod config;

// Portal domain
pub mod content;
pub mod credentials;
pub mod dashboard;
pub mod fixtures;
pub mod glyph;
pub mod login_attempt;
pub mod menu;
pub mod role;
pub mod session;

pub use error::*;
pub use config::*;

pub use content::*;
pub use credentials::{authenticate, check, credential_for, Credential, CREDENTIALS};
pub use dashboard::*;
pub use fixtures::StaticDashboardSource;
pub use glyph::*;
pub use login_attempt::LoginAttempt;
pub use menu::*;
pub use role::*;
pub use session::*;
