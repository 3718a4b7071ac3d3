//! Canned guidance and analytics figures. Nothing here is inferred; every
//! value is a fixture.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub kind: &'static str,
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub location: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub condition: &'static str,
    pub probability: u8,
    pub trend: Trend,
    pub recommendation: &'static str,
    pub priority: Priority,
}

/// Weekly vitals sample for the analytics chart
#[derive(Debug, Clone, PartialEq)]
pub struct VitalTrend {
    pub date: &'static str,
    pub bp_systolic: u16,
    pub bp_diastolic: u16,
    pub heart_rate: u16,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthMetric {
    pub name: &'static str,
    pub score: u8,
    pub trend: Trend,
    pub change: &'static str,
    pub target: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub name: &'static str,
    pub value: u8,
}
