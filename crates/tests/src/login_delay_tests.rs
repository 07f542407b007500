use std::time::Duration;

use shared_types::{LoginConfig, Role};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn rejection_also_waits() {
    let config = LoginConfig { delay_ms: 250 };
    let started = Instant::now();

    let verdict =
        server::auth::authenticate(&config, Role::SubAdmin, "subadmin@transport.com", "nope").await;

    assert!(verdict.is_err());
    assert!(started.elapsed() >= Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn not_resolved_before_delay() {
    let config = LoginConfig { delay_ms: 1000 };
    let pending = tokio::spawn(async move {
        server::auth::authenticate(&config, Role::Admin, "admin@transport.com", "admin123").await
    });

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(!pending.is_finished());

    let verdict = pending.await.unwrap();
    assert_eq!(verdict, Ok(Role::Admin));
}
