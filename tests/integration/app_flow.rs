use arogya_sarthi::health_id::is_provisional_id;
use arogya_sarthi::models::Config;
use arogya_sarthi::ui::{ArogyaApp, Phase, Route, ViewId};
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};

use crate::common::{demo_config, test_app, PlatformCall};

fn press(app: &mut ArogyaApp, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key).unwrap();
    }
}

fn type_text(app: &mut ArogyaApp, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c)).unwrap();
    }
}

fn screen_text(app: &ArogyaApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_onboarding_to_dashboard() {
    let (mut app, _events, _platform) = test_app(&Config::default());
    assert_eq!(app.phase(), Phase::Welcome);

    // en -> hi, then get started
    press(&mut app, &[KeyCode::Right, KeyCode::Enter]);
    assert_eq!(app.language(), "hi");
    assert_eq!(app.phase(), Phase::Registration);

    // registration type, then a name typed on personal info
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "Quasim");
    press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);

    assert_eq!(app.phase(), Phase::Main);
    assert_eq!(app.route(), &Route::Known(ViewId::Dashboard));
    let user = app.user().unwrap();
    assert_eq!(user.name, "Quasim");
    assert!(is_provisional_id(&user.health_id));
    assert!(!app.should_quit);

    assert!(screen_text(&app).contains("Welcome, Quasim"));
}

#[test_log::test(tokio::test)]
async fn test_unknown_initial_view_renders_blank_content() {
    let config = Config {
        initial_view: "appointments".to_string(),
        ..demo_config()
    };
    let (app, _events, _platform) = test_app(&config);

    assert_eq!(app.route(), &Route::Unrecognized("appointments".to_string()));
    assert_eq!(app.current_title(), None);

    let text = screen_text(&app);
    assert!(text.contains("Navigate"), "sidebar still renders");
    assert!(!text.contains("Welcome,"));
}

#[test_log::test(tokio::test)]
async fn test_every_view_renders() {
    let (mut app, _events, _platform) = test_app(&demo_config());
    for view in ViewId::ALL {
        app.navigate(view);
        assert!(app.current_title().is_some());
        assert!(!screen_text(&app).trim().is_empty());
    }
}

#[test_log::test(tokio::test)]
async fn test_dashboard_quick_action_navigates() {
    let (mut app, _events, _platform) = test_app(&demo_config());
    press(&mut app, &[KeyCode::Char('e')]);
    assert_eq!(app.route(), &Route::Known(ViewId::Emergency));
}

#[test_log::test(tokio::test)]
async fn test_emergency_actions_reach_platform() {
    let (mut app, _events, platform) = test_app(&demo_config());
    app.navigate(ViewId::Emergency);
    press(&mut app, &[KeyCode::Char('a'), KeyCode::Char('s'), KeyCode::Char('c')]);

    let calls = platform.calls();
    assert_eq!(calls[0], PlatformCall::Dial("108".to_string()));
    assert!(matches!(&calls[1], PlatformCall::Share(p) if p.title == "Emergency Health Information"));
    assert!(matches!(&calls[2], PlatformCall::Copy(text) if text.starts_with("EMERGENCY CONTACT INFO")));
    assert_eq!(calls[3], PlatformCall::Copy("+91 98765 43211".to_string()));
}

#[test_log::test(tokio::test)]
async fn test_report_form_rejects_then_accepts() {
    let (mut app, _events, _platform) = test_app(&demo_config());
    app.navigate(ViewId::Reporting);

    press(&mut app, &[KeyCode::Char('n'), KeyCode::Enter]);
    let latest = app.notifications().latest().map(|n| n.toast.title.clone());
    assert_eq!(latest.as_deref(), Some("Missing Information"));

    press(&mut app, &[KeyCode::Down]);
    type_text(&mut app, "Worker dormitory, Kochi");
    press(&mut app, &[KeyCode::Down]);
    type_text(&mut app, "Several workers with fever");
    press(&mut app, &[KeyCode::Enter]);

    let latest = app.notifications().latest().map(|n| n.toast.title.clone());
    assert_eq!(latest.as_deref(), Some("Report Submitted"));
}
