use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points needed per level
pub const POINTS_PER_LEVEL: u32 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub completed: bool,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    Daily,
    Weekly,
    Learning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub points: u32,
    pub time_left: String,
    pub progress: u8,
    #[serde(rename = "type")]
    pub kind: ChallengeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Data,
    Discount,
    Health,
    Premium,
}

/// Item in the rewards store; `points` is its cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub name: String,
    pub points: u32,
    pub available: bool,
    #[serde(rename = "type")]
    pub kind: RewardKind,
}

/// Progress through the current level, as a percentage
pub fn level_progress(points: u32) -> u16 {
    ((points % POINTS_PER_LEVEL) * 100 / POINTS_PER_LEVEL) as u16
}

/// Points total at which the next level boundary sits
pub fn next_level_points(points: u32) -> u32 {
    points.div_ceil(POINTS_PER_LEVEL) * POINTS_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_progress() {
        assert_eq!(level_progress(1250), 50);
        assert_eq!(level_progress(1000), 0);
        assert_eq!(level_progress(499), 99);
    }

    #[test]
    fn test_next_level_points() {
        assert_eq!(next_level_points(1250), 1500);
        assert_eq!(next_level_points(1000), 1000);
        assert_eq!(next_level_points(1), 500);
    }
}
