use dioxus::prelude::*;
use shared_types::PortalFlags;

/// Presentation flags from `config.toml`. No auth required; nothing here is sensitive.
#[server]
pub async fn get_portal_flags() -> Result<PortalFlags, ServerFnError> {
    Ok(crate::config::portal_config().features.clone())
}
