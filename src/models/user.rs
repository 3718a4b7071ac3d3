use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the user's health ID was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationType {
    Abha,
    #[default]
    Provisional,
}

impl RegistrationType {
    pub fn label(self) -> &'static str {
        match self {
            RegistrationType::Abha => "ABHA Health ID",
            RegistrationType::Provisional => "Provisional Health ID",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RegistrationType::Abha => "I have Ayushman Bharat Health Account (ABHA) number",
            RegistrationType::Provisional => "Create a temporary health ID that can be upgraded later",
        }
    }

    /// Badge shown on the health card
    pub fn badge(self) -> &'static str {
        match self {
            RegistrationType::Abha => "ABHA Verified",
            RegistrationType::Provisional => "Provisional ID",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            RegistrationType::Abha => RegistrationType::Provisional,
            RegistrationType::Provisional => RegistrationType::Abha,
        }
    }
}

/// State insurance eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceStatus {
    Eligible,
    #[default]
    Ineligible,
    Unknown,
}

impl InsuranceStatus {
    pub const ALL: [InsuranceStatus; 3] = [
        InsuranceStatus::Eligible,
        InsuranceStatus::Ineligible,
        InsuranceStatus::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InsuranceStatus::Eligible => "Eligible for State Insurance",
            InsuranceStatus::Ineligible => "Currently Ineligible",
            InsuranceStatus::Unknown => "Status Unknown",
        }
    }
}

/// Profile produced by a completed registration.
///
/// Created once when the wizard finishes and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_group: String,
    pub phone: String,
    pub emergency_contact: String,

    pub current_address: String,
    pub home_state: String,
    pub current_state: String,

    pub allergies: String,
    pub chronic_conditions: Vec<String>,
    pub medications: String,
    pub insurance_status: InsuranceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abha_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,

    pub data_sharing: bool,
    pub health_worker_access: bool,

    pub health_id: String,
    pub registration_type: RegistrationType,
    pub registration_date: DateTime<Utc>,
}

impl UserData {
    /// Blood group, or the given fallback when none was entered
    pub fn blood_group_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.blood_group.is_empty() {
            fallback
        } else {
            &self.blood_group
        }
    }
}
