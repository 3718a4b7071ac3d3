use arogya_sarthi::ui::{Route, ViewId, ViewRouter};
use pretty_assertions::assert_eq;
use test_log::test;

#[test]
fn test_initial_route_is_dashboard() {
    assert_eq!(ViewRouter::default().current(), &Route::Known(ViewId::Dashboard));
}

#[test]
fn test_any_view_reachable_from_any_view() {
    let mut router = ViewRouter::default();
    for from in ViewId::ALL {
        for to in ViewId::ALL {
            router.navigate(from);
            router.on_view_change(to.token());
            assert_eq!(router.current(), &Route::Known(to));
        }
    }
}

#[test]
fn test_unknown_token_is_kept() {
    let mut router = ViewRouter::default();
    router.on_view_change("appointments");

    assert_eq!(router.current(), &Route::Unrecognized("appointments".to_string()));
    assert_eq!(router.current().view(), None);
    assert_eq!(router.current().token(), "appointments");
}

#[test]
fn test_next_wraps_and_recovers_from_unknown() {
    let mut router = ViewRouter::new(Route::Known(ViewId::Settings));
    assert_eq!(router.next(), ViewId::Dashboard);

    router.on_view_change("???");
    assert_eq!(router.next(), ViewId::Dashboard);

    router.on_view_change("???");
    assert_eq!(router.previous(), ViewId::Settings);
}

#[test]
fn test_every_token_is_listed_once() {
    let tokens: Vec<&str> = ViewId::ALL.iter().map(|v| v.token()).collect();
    assert_eq!(
        tokens,
        vec![
            "dashboard",
            "health-card",
            "records",
            "tracking",
            "family",
            "emergency",
            "services",
            "ai-guidance",
            "rewards",
            "community",
            "telemedicine",
            "analytics",
            "reporting",
            "voice",
            "settings",
        ]
    );
}
