use std::time::Duration;

use arogya_sarthi::mock_data::SIMULATED_TRANSCRIPT;
use arogya_sarthi::ui::screens::voice::{reply_for, RESPONSE_DELAY, TRANSCRIPTION_DELAY};
use arogya_sarthi::ui::{AppEvent, ArogyaApp, EventManager, TimerKind, ViewId};
use crossterm::event::KeyCode;

use crate::common::{demo_config, test_app};

/// Let the paused clock run for `duration`, then feed every queued event to the app
async fn advance(app: &mut ArogyaApp, events: &mut EventManager, duration: Duration) -> Vec<TimerKind> {
    tokio::time::sleep(duration).await;
    let mut fired = Vec::new();
    while let Some(event) = events.try_receive() {
        if let AppEvent::Timer(timer) = &event {
            fired.push(timer.kind);
        }
        app.handle_app_event(event).unwrap();
    }
    fired
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_voice_exchange_runs_on_timers() {
    let (mut app, mut events, _platform) = test_app(&demo_config());
    app.navigate(ViewId::Voice);
    app.handle_key(KeyCode::Char(' ')).unwrap();

    let fired = advance(&mut app, &mut events, TRANSCRIPTION_DELAY - Duration::from_millis(100)).await;
    assert!(fired.is_empty());

    let fired = advance(&mut app, &mut events, Duration::from_millis(200)).await;
    assert_eq!(fired, vec![TimerKind::VoiceTranscription]);

    let fired = advance(&mut app, &mut events, RESPONSE_DELAY + Duration::from_millis(100)).await;
    assert_eq!(fired, vec![TimerKind::VoiceResponse]);

    let toast = &app.notifications().latest().unwrap().toast;
    assert_eq!(toast.title, "प्रतिक्रिया");
    assert_eq!(toast.message, reply_for(SIMULATED_TRANSCRIPT));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_leaving_screen_cancels_pending_timers() {
    let (mut app, mut events, _platform) = test_app(&demo_config());
    app.navigate(ViewId::Voice);
    app.handle_key(KeyCode::Char(' ')).unwrap();
    let toasts = app.notifications().len();

    app.navigate(ViewId::Dashboard);
    assert_eq!(app.scheduler().pending_count(), 0);

    let fired = advance(&mut app, &mut events, Duration::from_secs(10)).await;
    assert!(fired.is_empty());
    assert_eq!(app.notifications().len(), toasts);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_stop_listening_cancels_transcription() {
    let (mut app, mut events, _platform) = test_app(&demo_config());
    app.navigate(ViewId::Voice);
    app.handle_key(KeyCode::Char(' ')).unwrap();
    app.handle_key(KeyCode::Char(' ')).unwrap();

    let fired = advance(&mut app, &mut events, TRANSCRIPTION_DELAY * 2).await;
    assert!(fired.is_empty());
}
