use crate::kernel::service::KernelService;
use crate::view::alerts::{AlertCenter, AlertSeverity, DefaultAlertCenter};

#[test]
fn test_post_and_active() {
    let center = AlertCenter::new();
    assert!(center.is_empty());

    let first = center.info("home", "welcome");
    let second = center.error("api", "request failed");
    assert_ne!(first, second, "alert ids must be distinct");
    assert_eq!(center.len(), 2);

    let active = center.active();
    assert_eq!(active[0].message, "welcome");
    assert_eq!(active[0].severity, AlertSeverity::Info);
    assert_eq!(active[1].source, "api");
}

#[test]
fn test_dismiss() {
    let center = AlertCenter::new();
    let id = center.warning("home", "heads up");
    center.info("home", "still here");

    assert!(center.dismiss(id));
    assert!(!center.dismiss(id), "second dismiss of the same id must be a no-op");
    assert_eq!(center.len(), 1);
    assert_eq!(center.active()[0].message, "still here");
}

#[test]
fn test_active_at_least_filters_by_severity() {
    let center = AlertCenter::new();
    center.info("a", "fyi");
    center.warning("b", "hmm");
    center.error("c", "bad");
    center.post(AlertSeverity::Critical, "d", "very bad");

    let errors = center.active_at_least(AlertSeverity::Error);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|alert| alert.severity >= AlertSeverity::Error));

    let warnings = center.active_at_least(AlertSeverity::Warning);
    assert_eq!(warnings.len(), 3);
}

#[test]
fn test_clear() {
    let center = AlertCenter::new();
    center.info("a", "one");
    center.info("a", "two");
    center.clear();
    assert!(center.is_empty());
}

#[test]
fn test_severity_ordering_and_display() {
    assert!(AlertSeverity::Info < AlertSeverity::Warning);
    assert!(AlertSeverity::Warning < AlertSeverity::Error);
    assert!(AlertSeverity::Error < AlertSeverity::Critical);
    assert_eq!(AlertSeverity::Warning.to_string(), "warning");
}

#[tokio::test]
async fn test_service_stop_clears_alerts() {
    let service = DefaultAlertCenter::new();
    let center = service.center();
    center.info("home", "welcome");
    assert_eq!(center.len(), 1);

    service.stop().await.expect("stop");
    assert!(center.is_empty());
}
