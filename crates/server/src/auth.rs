use shared_types::{credentials, AppError, LoginConfig, Role};

/// Check a login attempt for `role` once the configured latency has elapsed.
///
/// The verdict is only reported; committing it to a session is the caller's job.
#[tracing::instrument(skip(config, password), fields(delay_ms = config.delay_ms))]
pub async fn authenticate(
    config: &LoginConfig,
    role: Role,
    email: &str,
    password: &str,
) -> Result<Role, AppError> {
    tokio::time::sleep(config.delay()).await;

    let verdict = credentials::authenticate(role, email, password);
    match &verdict {
        Ok(granted) => tracing::info!(role = %granted, "credentials accepted"),
        Err(_) => tracing::warn!(role = %role, "credentials rejected"),
    }
    verdict
}
