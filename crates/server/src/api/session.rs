use dioxus::prelude::*;
use shared_types::Role;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Verify credentials for `role` after the configured login delay.
///
/// Returns the granted role. The client commits it to its session; nothing
/// is stored server-side.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String, role: Role) -> Result<Role, ServerFnError> {
    let config = crate::config::portal_config();
    crate::auth::authenticate(&config.login, role, &email, &password)
        .await
        .map_err(|e| e.into_server_fn_error())
}
