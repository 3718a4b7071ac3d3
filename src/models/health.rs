use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Days without a checkup after which a family member counts as overdue
pub const CHECKUP_OVERDUE_DAYS: i64 = 180;

/// Kind of self-tracked health reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRecordType {
    BloodPressure,
    BloodSugar,
    Weight,
    Temperature,
    Medication,
    Symptoms,
}

impl HealthRecordType {
    /// Types offered by the add-reading form
    pub const TRACKABLE: [HealthRecordType; 4] = [
        HealthRecordType::BloodPressure,
        HealthRecordType::BloodSugar,
        HealthRecordType::Weight,
        HealthRecordType::Temperature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HealthRecordType::BloodPressure => "Blood Pressure",
            HealthRecordType::BloodSugar => "Blood Sugar",
            HealthRecordType::Weight => "Weight",
            HealthRecordType::Temperature => "Temperature",
            HealthRecordType::Medication => "Medication",
            HealthRecordType::Symptoms => "Symptoms",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            HealthRecordType::BloodPressure => "mmHg",
            HealthRecordType::BloodSugar => "mg/dL",
            HealthRecordType::Weight => "kg",
            HealthRecordType::Temperature => "°F",
            HealthRecordType::Medication | HealthRecordType::Symptoms => "",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            HealthRecordType::BloodPressure => "120/80",
            _ => "Enter value",
        }
    }
}

/// Clinical status attached to a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl ReadingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReadingStatus::Normal => "normal",
            ReadingStatus::Warning => "warning",
            ReadingStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HealthRecordType,
    pub value: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReadingStatus>,
}

/// Most recent reading of the given type, if any
pub fn latest_reading(records: &[HealthRecord], kind: HealthRecordType) -> Option<&HealthRecord> {
    records
        .iter()
        .filter(|record| record.kind == kind)
        .max_by_key(|record| record.timestamp)
}

/// Scheduled medication on the tracking screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time_to_take: String,
    pub last_taken: DateTime<Utc>,
    pub next_due: DateTime<Utc>,
    pub taken: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalRecordType {
    Consultation,
    Prescription,
    LabResult,
    Vaccination,
    Imaging,
    Surgery,
}

impl MedicalRecordType {
    pub fn label(self) -> &'static str {
        match self {
            MedicalRecordType::Consultation => "Consultation",
            MedicalRecordType::Prescription => "Prescription",
            MedicalRecordType::LabResult => "Lab Result",
            MedicalRecordType::Vaccination => "Vaccination",
            MedicalRecordType::Imaging => "Imaging",
            MedicalRecordType::Surgery => "Surgery",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            MedicalRecordType::Consultation => "Consultations",
            MedicalRecordType::Prescription => "Prescriptions",
            MedicalRecordType::LabResult => "Lab Results",
            MedicalRecordType::Vaccination => "Vaccinations",
            MedicalRecordType::Imaging => "Imaging",
            MedicalRecordType::Surgery => "Surgeries",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Completed,
    Pending,
}

impl RecordStatus {
    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Completed => "completed",
            RecordStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MedicalRecordType,
    pub title: String,
    pub provider: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    pub status: RecordStatus,
    pub tags: Vec<String>,
}

impl MedicalRecord {
    /// Case-insensitive substring match on title, provider or description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.provider.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Good,
    Monitoring,
    NeedsAttention,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Good => "Good Health",
            HealthStatus::Monitoring => "Monitoring",
            HealthStatus::NeedsAttention => "Needs Attention",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub age: u8,
    pub gender: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    #[serde(default)]
    pub last_checkup: Option<DateTime<Utc>>,
    pub health_status: HealthStatus,
}

impl FamilyMember {
    pub fn days_since_checkup(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_checkup.map(|date| (now - date).num_days())
    }

    /// No recorded checkup, or the last one is older than six months
    pub fn is_checkup_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.last_checkup {
            None => true,
            Some(date) => (now - date).num_seconds() > CHECKUP_OVERDUE_DAYS * 24 * 60 * 60,
        }
    }
}

/// Household summary counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FamilyStats {
    pub total: usize,
    pub needs_attention: usize,
    pub monitoring: usize,
    pub overdue: usize,
}

impl FamilyStats {
    pub fn compute(members: &[FamilyMember], now: DateTime<Utc>) -> Self {
        Self {
            total: members.len(),
            needs_attention: members
                .iter()
                .filter(|m| m.health_status == HealthStatus::NeedsAttention)
                .count(),
            monitoring: members
                .iter()
                .filter(|m| m.health_status == HealthStatus::Monitoring)
                .count(),
            overdue: members.iter().filter(|m| m.is_checkup_overdue(now)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn reading(id: &str, kind: HealthRecordType, value: &str, hours_ago: i64, now: DateTime<Utc>) -> HealthRecord {
        HealthRecord {
            id: id.to_string(),
            kind,
            value: value.to_string(),
            unit: kind.unit().to_string(),
            notes: None,
            timestamp: now - Duration::hours(hours_ago),
            status: None,
        }
    }

    fn member(status: HealthStatus, checkup_days_ago: Option<i64>, now: DateTime<Utc>) -> FamilyMember {
        FamilyMember {
            id: "m".to_string(),
            name: "Member".to_string(),
            relationship: "Son".to_string(),
            age: 3,
            gender: "male".to_string(),
            blood_group: None,
            emergency_contact: None,
            allergies: vec![],
            chronic_conditions: vec![],
            last_checkup: checkup_days_ago.map(|d| now - Duration::days(d)),
            health_status: status,
        }
    }

    #[test]
    fn test_latest_reading_picks_newest_of_type() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let records = vec![
            reading("1", HealthRecordType::BloodPressure, "135/85", 48, now),
            reading("2", HealthRecordType::BloodSugar, "95", 5, now),
            reading("3", HealthRecordType::BloodPressure, "120/80", 2, now),
        ];

        let latest = latest_reading(&records, HealthRecordType::BloodPressure).unwrap();
        assert_eq!(latest.value, "120/80");
        assert!(latest_reading(&records, HealthRecordType::Weight).is_none());
    }

    #[test]
    fn test_family_stats_counts_overdue_and_status() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let members = vec![
            member(HealthStatus::Monitoring, Some(45), now),
            member(HealthStatus::Good, None, now),
            member(HealthStatus::NeedsAttention, Some(181), now),
            member(HealthStatus::Good, Some(180), now),
        ];

        let stats = FamilyStats::compute(&members, now);
        assert_eq!(
            stats,
            FamilyStats { total: 4, needs_attention: 1, monitoring: 1, overdue: 2 }
        );
    }

    #[test]
    fn test_medical_record_search_is_case_insensitive() {
        let record = MedicalRecord {
            id: "1".to_string(),
            kind: MedicalRecordType::LabResult,
            title: "Complete Blood Count".to_string(),
            provider: "MedLab Diagnostics".to_string(),
            date: Utc::now(),
            location: "MedLab, Ernakulam".to_string(),
            description: "All parameters within normal range".to_string(),
            attachments: vec![],
            status: RecordStatus::Completed,
            tags: vec![],
        };

        assert!(record.matches_search("blood"));
        assert!(record.matches_search("MEDLAB"));
        assert!(record.matches_search("normal range"));
        assert!(record.matches_search(""));
        assert!(!record.matches_search("ernakulam"));
    }
}
