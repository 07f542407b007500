use shared_types::{credential_for, AppError, LoginConfig, Notice, Role, Session};

/// Login settings with the artificial latency switched off.
pub fn instant_login() -> LoginConfig {
    LoginConfig { delay_ms: 0 }
}

/// Run the full login path: server-side check, then commit on the session.
pub async fn submit_login(
    session: &mut Session,
    config: &LoginConfig,
    role: Role,
    email: &str,
    password: &str,
) -> Result<Notice, AppError> {
    let verdict = server::auth::authenticate(config, role, email, password).await;
    session.apply_login(role, verdict)
}

/// A session signed in as `role` with that role's demo credentials.
pub async fn signed_in(role: Role) -> Session {
    let mut session = Session::new();
    let cred = credential_for(role);
    let notice = submit_login(&mut session, &instant_login(), role, cred.email, cred.password).await;
    assert_eq!(notice, Ok(Notice::SignedIn(role)));
    session
}
