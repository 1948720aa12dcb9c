use std::time::{Duration, Instant};

use juxta_core::error::JuxtaError;
use juxta_core::notify::{Notifier, Severity};

#[test]
fn test_default_lifetime_is_three_seconds() {
    assert_eq!(Notifier::default().lifetime(), Duration::from_millis(3000));
}

#[test]
fn test_auto_dismiss_after_lifetime() {
    let mut n = Notifier::new(Duration::from_millis(3000));
    let t0 = Instant::now();
    n.push_at("Export complete", Severity::Success, t0);
    n.push_at("Second", Severity::Info, t0 + Duration::from_millis(1000));

    n.prune(t0 + Duration::from_millis(2999));
    assert_eq!(n.active().len(), 2);

    n.prune(t0 + Duration::from_millis(3000));
    assert_eq!(n.active().len(), 1);
    assert_eq!(n.active()[0].message, "Second");

    n.prune(t0 + Duration::from_millis(4000));
    assert!(n.active().is_empty());
}

#[test]
fn test_manual_dismiss() {
    let mut n = Notifier::default();
    let id = n.push("Something failed", Severity::Error);
    assert!(n.dismiss(id));
    assert!(!n.dismiss(id));
    assert!(n.active().is_empty());
}

#[test]
fn test_ids_are_unique() {
    let mut n = Notifier::default();
    let a = n.push("a", Severity::Info);
    let b = n.push("b", Severity::Info);
    assert_ne!(a, b);
}

#[test]
fn test_push_error_uses_user_message() {
    let mut n = Notifier::default();
    n.push_error(&JuxtaError::Validation("No file selected".into()));
    let shown = &n.active()[0];
    assert_eq!(shown.message, "No file selected");
    assert_eq!(shown.severity, Severity::Error);
}

#[test]
fn test_next_expiry() {
    let mut n = Notifier::new(Duration::from_millis(1000));
    let t0 = Instant::now();
    assert_eq!(n.next_expiry(t0), None);
    n.push_at("x", Severity::Warning, t0);
    assert_eq!(
        n.next_expiry(t0 + Duration::from_millis(400)),
        Some(Duration::from_millis(600))
    );
}
