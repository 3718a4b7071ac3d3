use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use ratatui::{prelude::Rect, Frame};

use crate::models::UserData;
use crate::platform::SharePayload;
use crate::ui::{
    events::TimerKind,
    router::ViewId,
    screens::{
        AiGuidanceView, AnalyticsView, CommunityView, DashboardView, EmergencyView, FamilyHealthView,
        GamificationView, HealthCardView, HealthTrackingView, MedicalRecordsView, ReportingView,
        ServicesHubView, SettingsView, TelemedicineView, VoiceView,
    },
    state::Toast,
};

/// Read-only data handed to every screen
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub user: Option<&'a UserData>,
    pub language: &'a str,
    pub now: DateTime<Utc>,
}

impl<'a> ViewContext<'a> {
    pub fn new(user: Option<&'a UserData>, language: &'a str, now: DateTime<Utc>) -> Self {
        Self { user, language, now }
    }
}

/// Requests a screen makes of the app
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    ChangeView(ViewId),
    Notify(Toast),
    Schedule { kind: TimerKind, after: Duration },
    CancelTimers,
    /// Open the share sheet; optionally copy `payload.text` if sharing is unavailable
    Share { payload: SharePayload, fallback_to_clipboard: bool },
    CopyToClipboard { text: String, label: String },
    Dial(String),
    LanguageSelected(String),
    ContinueToRegistration,
    RegistrationComplete(Box<UserData>),
}

/// Messages queued by a handler, drained by the app afterwards
#[derive(Debug, Default)]
pub struct Outbox {
    messages: Vec<AppMessage>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: AppMessage) {
        self.messages.push(message);
    }

    pub fn notify(&mut self, toast: Toast) {
        self.push(AppMessage::Notify(toast));
    }

    pub fn drain(&mut self) -> Vec<AppMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[AppMessage] {
        &self.messages
    }
}

/// View contract for all TUI screens (non-async for trait object compatibility)
pub trait View {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext);

    fn get_title(&self) -> String;

    fn get_status(&self) -> String;

    /// Key hints shown in the status bar
    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// True while a text field has focus, so global keys like `q` are typed instead
    fn is_editing(&self) -> bool {
        false
    }

    /// Returns true if the key was handled
    fn handle_key(&mut self, _key: KeyCode, _ctx: &ViewContext, _outbox: &mut Outbox) -> Result<bool> {
        Ok(false) // Default: not handled
    }

    fn handle_timer(&mut self, _kind: TimerKind, _outbox: &mut Outbox) -> Result<bool> {
        Ok(false)
    }
}

/// View factory. Screens are built fresh on every navigation, so local state
/// never survives leaving a screen.
pub struct ViewFactory;

impl ViewFactory {
    pub fn create(view: ViewId, now: DateTime<Utc>) -> Box<dyn View> {
        match view {
            ViewId::Dashboard => Box::new(DashboardView::new()),
            ViewId::HealthCard => Box::new(HealthCardView::new()),
            ViewId::Records => Box::new(MedicalRecordsView::new(now)),
            ViewId::Tracking => Box::new(HealthTrackingView::new(now)),
            ViewId::Family => Box::new(FamilyHealthView::new(now)),
            ViewId::Emergency => Box::new(EmergencyView::new()),
            ViewId::Services => Box::new(ServicesHubView::new()),
            ViewId::AiGuidance => Box::new(AiGuidanceView::new()),
            ViewId::Rewards => Box::new(GamificationView::new()),
            ViewId::Community => Box::new(CommunityView::new()),
            ViewId::Telemedicine => Box::new(TelemedicineView::new()),
            ViewId::Analytics => Box::new(AnalyticsView::new()),
            ViewId::Reporting => Box::new(ReportingView::new()),
            ViewId::Voice => Box::new(VoiceView::new()),
            ViewId::Settings => Box::new(SettingsView::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_every_view() {
        let now = Utc::now();
        for view in ViewId::ALL {
            let screen = ViewFactory::create(view, now);
            assert!(!screen.get_title().is_empty(), "{:?} has no title", view);
        }
    }

    #[test]
    fn test_outbox_drain_empties() {
        let mut outbox = Outbox::new();
        outbox.push(AppMessage::ChangeView(ViewId::Emergency));
        outbox.notify(Toast::info("Hello", ""));

        let drained = outbox.drain();
        assert_eq!(drained.len(), 2);
        assert!(outbox.is_empty());
    }
}
