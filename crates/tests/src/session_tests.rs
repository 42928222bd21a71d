use pretty_assertions::assert_eq;
use server::session::SessionRegistry;

#[test]
fn created_session_resolves_to_its_user() {
    let registry = SessionRegistry::new();
    let token = registry.create(42, 12);
    assert_eq!(registry.resolve(&token), Some(42));
}

#[test]
fn tokens_are_unique_per_session() {
    let registry = SessionRegistry::new();
    let a = registry.create(1, 12);
    let b = registry.create(1, 12);
    assert_ne!(a, b);
    assert_eq!(registry.active_count(), 2);
}

#[test]
fn unknown_token_does_not_resolve() {
    let registry = SessionRegistry::new();
    assert_eq!(registry.resolve("not-a-token"), None);
}

#[test]
fn revoked_session_no_longer_resolves() {
    let registry = SessionRegistry::new();
    let token = registry.create(7, 12);
    registry.revoke(&token);
    assert_eq!(registry.resolve(&token), None);
    assert_eq!(registry.active_count(), 0);
}

#[test]
fn revoking_unknown_token_is_a_noop() {
    let registry = SessionRegistry::new();
    let token = registry.create(7, 12);
    registry.revoke("different-token");
    assert_eq!(registry.resolve(&token), Some(7));
}

#[test]
fn expired_session_is_rejected_and_removed() {
    let registry = SessionRegistry::new();
    // Zero TTL: expires_at == creation time, so the entry is already stale.
    let token = registry.create(9, 0);
    assert_eq!(registry.resolve(&token), None);
    assert_eq!(registry.active_count(), 0);
}
