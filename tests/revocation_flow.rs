mod common;

use chrono::{Duration, Utc};
use common::TestContext;

#[tokio::test]
async fn test_revoke_and_membership() {
    println!("\n\n[+] Running test: test_revoke_and_membership");
    let ctx = TestContext::new().await;
    println!("[+] Test context created.");

    let expires_at = Utc::now() + Duration::hours(24);

    assert!(!ctx.db.token_revoked("some-token").await.unwrap());

    println!("[>] Revoking token.");
    ctx.db.revoke_token("some-token", expires_at).await.unwrap();
    assert!(ctx.db.token_revoked("some-token").await.unwrap());
    assert!(!ctx.db.token_revoked("another-token").await.unwrap());
    println!("[/] Test passed: Membership reflects revocation.");
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    println!("\n\n[+] Running test: test_revoke_is_idempotent");
    let ctx = TestContext::new().await;
    println!("[+] Test context created.");

    let first_expiry = Utc::now() + Duration::hours(24);
    ctx.db.revoke_token("dup-token", first_expiry).await.unwrap();

    // Second insert must not fail and must not overwrite the record
    let later_expiry = Utc::now() + Duration::hours(48);
    ctx.db.revoke_token("dup-token", later_expiry).await.unwrap();

    assert!(ctx.db.token_revoked("dup-token").await.unwrap());
    println!("[/] Test passed: Double revoke is a no-op.");
}

#[tokio::test]
async fn test_purge_removes_only_expired_records() {
    println!("\n\n[+] Running test: test_purge_removes_only_expired_records");
    let ctx = TestContext::new().await;
    println!("[+] Test context created.");

    ctx.db
        .revoke_token("stale-token", Utc::now() - Duration::hours(1))
        .await
        .unwrap();
    ctx.db
        .revoke_token("live-token", Utc::now() + Duration::hours(1))
        .await
        .unwrap();
    println!("[+] Seeded one expired and one live record.");

    let purged = ctx.db.purge_expired_tokens().await.unwrap();
    println!("[<] Purged {} records.", purged);

    assert_eq!(purged, 1);
    assert!(!ctx.db.token_revoked("stale-token").await.unwrap());
    assert!(ctx.db.token_revoked("live-token").await.unwrap());
    println!("[/] Test passed: Purge only touches expired rows.");
}

#[tokio::test]
async fn test_purge_on_empty_ledger() {
    println!("\n\n[+] Running test: test_purge_on_empty_ledger");
    let ctx = TestContext::new().await;

    let purged = ctx.db.purge_expired_tokens().await.unwrap();
    assert_eq!(purged, 0);
    println!("[/] Test passed: Empty ledger purge is a no-op.");
}
