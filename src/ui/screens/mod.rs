//! One module per screen. Welcome and registration are onboarding screens;
//! the rest are mounted by `ViewFactory` into the main layout.

pub mod ai_guidance;
pub mod analytics;
pub mod community;
pub mod community_reporting;
pub mod dashboard;
pub mod emergency_info;
pub mod family_health;
pub mod gamification;
pub mod health_card;
pub mod health_tracking;
pub mod medical_records;
pub mod registration;
pub mod services_hub;
pub mod settings;
pub mod telemedicine;
pub mod voice;
pub mod welcome;

pub use ai_guidance::AiGuidanceView;
pub use analytics::AnalyticsView;
pub use community::{CommunityFeed, CommunityView};
pub use community_reporting::{ReportError, ReportForm, ReportingView};
pub use dashboard::DashboardView;
pub use emergency_info::EmergencyView;
pub use family_health::FamilyHealthView;
pub use gamification::{GamificationView, RedeemError, RewardsWallet};
pub use health_card::HealthCardView;
pub use health_tracking::HealthTrackingView;
pub use medical_records::MedicalRecordsView;
pub use registration::{RegistrationForm, RegistrationView, WizardStep};
pub use services_hub::ServicesHubView;
pub use settings::SettingsView;
pub use telemedicine::TelemedicineView;
pub use voice::VoiceView;
pub use welcome::WelcomeView;
