use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::mock_data;
use crate::models::{Config, UserData};
use crate::platform::{Platform, PlatformError, TerminalPlatform};
use crate::ui::{
    events::{AppEvent, EventManager, Scheduler, TimerFired},
    layout::TuiLayout,
    navigation::render_sidebar,
    router::{Route, ViewId, ViewRouter},
    screens::{RegistrationView, WelcomeView},
    state::{Notification, NotificationCenter, Toast},
    view::{AppMessage, Outbox, View, ViewContext, ViewFactory},
};

const GLOBAL_HINTS: [(&str, &str); 3] = [("Tab", "next screen"), ("S-Tab", "previous"), ("q", "quit")];

/// Where the user is in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    Registration,
    Main,
}

/// Top-level application state. Owns the user record, the selected language
/// and the one mounted screen.
pub struct ArogyaApp {
    pub should_quit: bool,
    phase: Phase,
    router: ViewRouter,
    user_data: Option<UserData>,
    language: String,
    onboarding: Option<Box<dyn View>>,
    current_view: Option<Box<dyn View>>,
    notifications: NotificationCenter,
    scheduler: Scheduler,
    platform: Box<dyn Platform>,
}

impl ArogyaApp {
    /// Must be called from within a tokio runtime, since screens may schedule timers
    pub fn new(config: &Config, sender: mpsc::Sender<AppEvent>, platform: Box<dyn Platform>) -> Self {
        let mut app = Self {
            should_quit: false,
            phase: Phase::Welcome,
            router: ViewRouter::new(Route::from_token(&config.initial_view)),
            user_data: None,
            language: config.language.clone(),
            onboarding: Some(Box::new(WelcomeView::new(&config.language))),
            current_view: None,
            notifications: NotificationCenter::default(),
            scheduler: Scheduler::new(sender),
            platform,
        };

        if config.demo_mode {
            info!("Demo mode, skipping onboarding");
            app.complete_registration(mock_data::demo_user(Utc::now()));
        }
        app
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn user(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Title of the mounted screen, if any
    pub fn current_title(&self) -> Option<String> {
        self.active_view().map(|view| view.get_title())
    }

    fn active_view(&self) -> Option<&dyn View> {
        match self.phase {
            Phase::Main => self.current_view.as_deref(),
            Phase::Welcome | Phase::Registration => self.onboarding.as_deref(),
        }
    }

    fn complete_registration(&mut self, user: UserData) {
        info!("Registered {} with health id {}", user.name, user.health_id);
        self.user_data = Some(user);
        self.onboarding = None;
        self.phase = Phase::Main;
        self.mount_current();
    }

    fn mount_current(&mut self) {
        self.current_view = self
            .router
            .current()
            .view()
            .map(|view| ViewFactory::create(view, Utc::now()));
    }

    /// Switch to a screen by token. Unknown tokens leave the content area empty.
    pub fn on_view_change(&mut self, token: &str) {
        self.scheduler.cancel_all();
        self.router.on_view_change(token);
        self.mount_current();
    }

    pub fn navigate(&mut self, view: ViewId) {
        self.scheduler.cancel_all();
        self.router.navigate(view);
        self.mount_current();
    }

    pub fn notify(&mut self, toast: Toast) {
        self.notifications.push(toast, Utc::now());
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }
        self.handle_key(key.code)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        let editing = self.active_view().map(|view| view.is_editing()).unwrap_or(false);
        if !editing {
            match key {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    debug!("Quit key pressed");
                    self.should_quit = true;
                    return Ok(());
                }
                KeyCode::Tab if self.phase == Phase::Main => {
                    let view = self.router.next();
                    self.navigate(view);
                    return Ok(());
                }
                KeyCode::BackTab if self.phase == Phase::Main => {
                    let view = self.router.previous();
                    self.navigate(view);
                    return Ok(());
                }
                _ => {}
            }
        }

        let mut outbox = Outbox::new();
        let ctx = ViewContext::new(self.user_data.as_ref(), &self.language, Utc::now());
        let view = match self.phase {
            Phase::Main => self.current_view.as_mut(),
            Phase::Welcome | Phase::Registration => self.onboarding.as_mut(),
        };
        if let Some(view) = view {
            let handled = view.handle_key(key, &ctx, &mut outbox)?;
            debug!("Key {:?} routed to {}, handled: {}", key, view.get_title(), handled);
        }

        self.dispatch(outbox.drain());
        Ok(())
    }

    /// Deliver a timer to the mounted screen. Timers from an earlier screen are dropped.
    pub fn handle_timer(&mut self, fired: TimerFired) -> Result<()> {
        if !self.scheduler.is_current(&fired) {
            debug!("Dropping stale {:?} from generation {}", fired.kind, fired.generation);
            return Ok(());
        }

        let mut outbox = Outbox::new();
        if let Some(view) = self.current_view.as_mut() {
            view.handle_timer(fired.kind, &mut outbox)?;
        }
        self.dispatch(outbox.drain());
        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => self.handle_key_event(key),
            AppEvent::Timer(fired) => self.handle_timer(fired),
        }
    }

    fn dispatch(&mut self, messages: Vec<AppMessage>) {
        for message in messages {
            match message {
                AppMessage::ChangeView(view) => self.navigate(view),
                AppMessage::Notify(toast) => self.notify(toast),
                AppMessage::Schedule { kind, after } => self.scheduler.schedule(kind, after),
                AppMessage::CancelTimers => self.scheduler.cancel_all(),
                AppMessage::Share {
                    payload,
                    fallback_to_clipboard,
                } => match self.platform.share(&payload) {
                    Ok(()) => info!("Shared '{}'", payload.title),
                    Err(PlatformError::ShareCancelled) => debug!("Share cancelled"),
                    Err(e) if fallback_to_clipboard => {
                        debug!("{}, copying instead", e);
                        self.copy_to_clipboard(&payload.text, &payload.title);
                    }
                    Err(e) => info!("Share of '{}' not possible: {}", payload.title, e),
                },
                AppMessage::CopyToClipboard { text, label } => self.copy_to_clipboard(&text, &label),
                AppMessage::Dial(number) => {
                    if let Err(e) = self.platform.dial(&number) {
                        warn!("Dial {} failed: {}", number, e);
                        self.notify(Toast::error("Call Failed", e.to_string()));
                    }
                }
                AppMessage::LanguageSelected(code) => {
                    info!("Language set to {}", code);
                    self.language = code;
                }
                AppMessage::ContinueToRegistration => {
                    self.phase = Phase::Registration;
                    self.onboarding = Some(Box::new(RegistrationView::new()));
                }
                AppMessage::RegistrationComplete(user) => self.complete_registration(*user),
            }
        }
    }

    fn copy_to_clipboard(&mut self, text: &str, label: &str) {
        match self.platform.copy_to_clipboard(text) {
            Ok(()) => self.notify(Toast::info("Copied", format!("{} copied to clipboard", label))),
            Err(e) => warn!("Clipboard copy failed: {}", e),
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let now = Utc::now();
        let ctx = ViewContext::new(self.user_data.as_ref(), &self.language, now);

        let layout = match self.phase {
            Phase::Main => TuiLayout::new(f.area()),
            Phase::Welcome | Phase::Registration => TuiLayout::onboarding(f.area()),
        };
        layout.render_header(f, &self.language);
        if self.phase == Phase::Main {
            render_sidebar(f, layout.sidebar, self.router.current(), self.user_data.as_ref());
        }

        let view = self.active_view();
        if let Some(view) = view {
            view.render(f, layout.content, &ctx);
        }

        let mut hints = view.map(|v| v.key_hints()).unwrap_or_default();
        if self.phase == Phase::Main {
            hints.extend(GLOBAL_HINTS);
        }
        let status = view.map(|v| v.get_status()).unwrap_or_default();
        let notification: Option<&Notification> = self.notifications.active(now);
        layout.render_status_bar(f, &hints, notification, &status);
    }
}

/// Run the TUI until the user quits
pub async fn run_app_async(config: Config) -> Result<()> {
    info!("Starting Arogya Sarthi TUI");
    let mut events = EventManager::new();
    let mut app = ArogyaApp::new(&config, events.sender(), Box::new(TerminalPlatform::new()));

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut events, config.tick_rate()).await;
    restore_terminal(&mut terminal)?;
    info!("TUI closed");

    result
}

fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ArogyaApp,
    events: &mut EventManager,
    tick_rate: Duration,
) -> Result<()> {
    let mut reader = EventStream::new();
    let mut tick = tokio::time::interval(tick_rate);

    while !app.should_quit {
        terminal.draw(|f| app.draw(f))?;

        tokio::select! {
            maybe_event = reader.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_app_event(AppEvent::Key(key))?,
                Some(Ok(Event::Resize(width, height))) => debug!("Resized to {}x{}", width, height),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = events.receive() => app.handle_app_event(event)?,
            _ = tick.tick() => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MockPlatform;
    use crate::ui::events::TimerKind;
    use assert_matches::assert_matches;
    use ratatui::backend::TestBackend;

    fn demo_config() -> Config {
        Config {
            demo_mode: true,
            ..Config::default()
        }
    }

    fn app_with(config: &Config, platform: MockPlatform) -> (ArogyaApp, EventManager) {
        let events = EventManager::new();
        let app = ArogyaApp::new(config, events.sender(), Box::new(platform));
        (app, events)
    }

    fn screen_text(app: &ArogyaApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn test_starts_on_welcome() {
        let (app, _events) = app_with(&Config::default(), MockPlatform::new());
        assert_eq!(app.phase(), Phase::Welcome);
        assert!(app.user().is_none());
        assert!(screen_text(&app).contains("Arogya Sarthi"));
    }

    #[tokio::test]
    async fn test_demo_mode_lands_on_dashboard() {
        let (app, _events) = app_with(&demo_config(), MockPlatform::new());
        assert_eq!(app.phase(), Phase::Main);
        assert_eq!(app.route(), &Route::Known(ViewId::Dashboard));
        assert!(screen_text(&app).contains("Welcome,"));
    }

    #[tokio::test]
    async fn test_tab_cycles_views() {
        let (mut app, _events) = app_with(&demo_config(), MockPlatform::new());
        app.handle_key(KeyCode::Tab).unwrap();
        assert_eq!(app.route(), &Route::Known(ViewId::HealthCard));
        app.handle_key(KeyCode::BackTab).unwrap();
        app.handle_key(KeyCode::BackTab).unwrap();
        assert_eq!(app.route(), &Route::Known(ViewId::Settings));
    }

    #[tokio::test]
    async fn test_unknown_token_has_no_content() {
        let (mut app, _events) = app_with(&demo_config(), MockPlatform::new());
        app.on_view_change("nowhere");

        assert!(app.current_title().is_none());
        let text = screen_text(&app);
        assert!(!text.contains("Welcome,"));
        assert!(text.contains("Navigate"));
    }

    #[tokio::test]
    async fn test_q_is_typed_while_editing() {
        let (mut app, _events) = app_with(&demo_config(), MockPlatform::new());
        app.navigate(ViewId::Community);
        app.handle_key(KeyCode::Char('n')).unwrap();
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Esc).unwrap();
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_ctrl_c_always_quits() {
        let (mut app, _events) = app_with(&Config::default(), MockPlatform::new());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_terminal_keys_share_the_event_path() {
        let (mut app, _events) = app_with(&demo_config(), MockPlatform::new());

        let mut release = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_app_event(AppEvent::Key(release)).unwrap();
        assert_eq!(app.route(), &Route::Known(ViewId::Dashboard));

        app.handle_app_event(AppEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)))
            .unwrap();
        assert_eq!(app.route(), &Route::Known(ViewId::HealthCard));
    }

    #[tokio::test]
    async fn test_emergency_share_falls_back_to_clipboard() {
        let mut platform = MockPlatform::new();
        platform
            .expect_share()
            .times(1)
            .returning(|_| Err(PlatformError::ShareUnavailable));
        platform
            .expect_copy_to_clipboard()
            .withf(|text: &str| text.starts_with("EMERGENCY CONTACT INFO"))
            .times(1)
            .returning(|_| Ok(()));

        let (mut app, _events) = app_with(&demo_config(), platform);
        app.navigate(ViewId::Emergency);
        app.handle_key(KeyCode::Char('s')).unwrap();

        assert_eq!(app.notifications().latest().map(|n| n.toast.title.as_str()), Some("Copied"));
    }

    #[tokio::test]
    async fn test_health_card_share_has_no_fallback() {
        let mut platform = MockPlatform::new();
        platform
            .expect_share()
            .times(1)
            .returning(|_| Err(PlatformError::ShareUnavailable));
        platform.expect_copy_to_clipboard().never();

        let (mut app, _events) = app_with(&demo_config(), platform);
        app.navigate(ViewId::HealthCard);
        app.handle_key(KeyCode::Char('s')).unwrap();
        assert!(app.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_dial_failure_shows_toast() {
        let mut platform = MockPlatform::new();
        platform
            .expect_dial()
            .withf(|number: &str| number == "108")
            .times(1)
            .returning(|n| Err(PlatformError::Dial(format!("no opener for {}", n))));

        let (mut app, _events) = app_with(&demo_config(), platform);
        app.navigate(ViewId::Emergency);
        app.handle_key(KeyCode::Char('a')).unwrap();

        let latest = app.notifications().latest().map(|n| n.toast.clone());
        assert_matches!(latest, Some(toast) if toast.title == "Call Failed");
    }

    #[tokio::test]
    async fn test_stale_timer_is_dropped() {
        let (mut app, _events) = app_with(&demo_config(), MockPlatform::new());
        app.navigate(ViewId::Voice);
        app.handle_key(KeyCode::Char(' ')).unwrap();
        let generation = app.scheduler().generation();

        app.handle_timer(TimerFired { kind: TimerKind::VoiceTranscription, generation })
            .unwrap();
        let before = app.notifications().len();

        let stale = TimerFired { kind: TimerKind::VoiceResponse, generation: generation - 1 };
        app.handle_timer(stale).unwrap();
        assert_eq!(app.notifications().len(), before);

        app.handle_timer(TimerFired { kind: TimerKind::VoiceResponse, generation })
            .unwrap();
        assert_eq!(app.notifications().len(), before + 1);
    }
}
