use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forum categories a post can be filed under
pub const POST_CATEGORIES: [&str; 5] = [
    "Healthcare",
    "Insurance",
    "Health News",
    "General Support",
    "Mental Health",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: u32,
    pub author: String,
    pub state: String,
    pub content: String,
    pub category: String,
    pub likes: u32,
    pub replies: u32,
    pub time_ago: String,
    pub is_helpful: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    #[default]
    HealthIssue,
    WaterQuality,
    Outbreak,
    Facility,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::HealthIssue,
        ReportType::WaterQuality,
        ReportType::Outbreak,
        ReportType::Facility,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportType::HealthIssue => "Health Issue",
            ReportType::WaterQuality => "Water Quality",
            ReportType::Outbreak => "Disease Outbreak",
            ReportType::Facility => "Healthcare Facility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Investigating,
    Confirmed,
    Resolved,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Investigating => "investigating",
            ReportStatus::Confirmed => "confirmed",
            ReportStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Anonymous report previously filed by the community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityReport {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub title: String,
    pub location: String,
    pub description: String,
    pub status: ReportStatus,
    pub severity: Severity,
    pub reported_by: String,
    pub date: NaiveDate,
    pub upvotes: u32,
}

/// Area-wide advisory issued by health authorities
#[derive(Debug, Clone, PartialEq)]
pub struct HealthAlert {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub date: NaiveDate,
    pub area: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Entry on the peer-support or shared-resources tabs
#[derive(Debug, Clone, PartialEq)]
pub struct SupportResource {
    pub title: &'static str,
    pub subtitle: &'static str,
}
