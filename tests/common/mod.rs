//! Common test utilities and helpers

use std::cell::RefCell;
use std::rc::Rc;

use arogya_sarthi::models::Config;
use arogya_sarthi::platform::{Platform, PlatformError, SharePayload};
use arogya_sarthi::ui::{ArogyaApp, EventManager};

/// A platform call as seen by `RecordingPlatform`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Share(SharePayload),
    Copy(String),
    Dial(String),
}

/// Platform double that records every call. Sharing is unavailable, like a
/// real terminal; clipboard and dialer succeed.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    calls: Rc<RefCell<Vec<PlatformCall>>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.borrow().clone()
    }
}

impl Platform for RecordingPlatform {
    fn share(&mut self, payload: &SharePayload) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(PlatformCall::Share(payload.clone()));
        Err(PlatformError::ShareUnavailable)
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(PlatformCall::Copy(text.to_string()));
        Ok(())
    }

    fn dial(&mut self, number: &str) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(PlatformCall::Dial(number.to_string()));
        Ok(())
    }
}

/// App plus its event channel and a handle on the recorded platform calls.
/// Must be called inside a tokio runtime.
pub fn test_app(config: &Config) -> (ArogyaApp, EventManager, RecordingPlatform) {
    let events = EventManager::new();
    let platform = RecordingPlatform::new();
    let app = ArogyaApp::new(config, events.sender(), Box::new(platform.clone()));
    (app, events, platform)
}

pub fn demo_config() -> Config {
    Config {
        demo_mode: true,
        ..Config::default()
    }
}

/// Test data utilities
pub mod test_data {
    use arogya_sarthi::models::{RegistrationType, UserData};
    use arogya_sarthi::ui::screens::registration::{FieldValue, FormField, RegistrationForm};
    use chrono::{DateTime, TimeZone, Utc};
    use rand::{rngs::StdRng, SeedableRng};

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    pub fn filled_form(registration_type: RegistrationType) -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.update_field(FormField::RegistrationType, FieldValue::Registration(registration_type));
        form.update_field(FormField::Name, FieldValue::Text("Ravi Kumar".to_string()));
        form.update_field(FormField::Age, FieldValue::Text("32".to_string()));
        form.update_field(FormField::BloodGroup, FieldValue::Text("B+".to_string()));
        form.update_field(FormField::EmergencyContact, FieldValue::Text("+91 98765 43211".to_string()));
        form.update_field(FormField::HomeState, FieldValue::Text("Bihar".to_string()));
        form
    }

    /// Provisional registration with a fixed clock and seed
    pub fn sample_user() -> UserData {
        let form = filled_form(RegistrationType::Provisional);
        form.complete(fixed_now(), &mut StdRng::seed_from_u64(11))
    }
}

/// Logging utilities for tests
pub mod logging {
    use tracing::info;

    /// Log test step
    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }
}
