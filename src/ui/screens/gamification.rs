use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use thiserror::Error;
use tracing::info;

use crate::mock_data::{self, STARTING_LEVEL, STARTING_POINTS};
use crate::models::{level_progress, next_level_points, Achievement, Challenge, Reward};
use crate::ui::components::{badge, progress_text, render_card, render_progress_bar, render_title, selectable_line, Tone};
use crate::ui::state::Toast;
use crate::ui::view::{Outbox, View, ViewContext};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedeemError {
    #[error("{0} is not available right now")]
    Unavailable(String),

    #[error("You need {shortfall} more points to redeem this reward")]
    InsufficientPoints { shortfall: u32 },
}

/// Points balance and level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardsWallet {
    points: u32,
    level: u32,
}

impl Default for RewardsWallet {
    fn default() -> Self {
        Self::new(STARTING_POINTS, STARTING_LEVEL)
    }
}

impl RewardsWallet {
    pub fn new(points: u32, level: u32) -> Self {
        Self { points, level }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Spend `reward.points`. Fails without touching the balance when the
    /// reward is unavailable or the balance is short.
    pub fn redeem(&mut self, reward: &Reward) -> Result<(), RedeemError> {
        if !reward.available {
            return Err(RedeemError::Unavailable(reward.name.clone()));
        }
        if self.points < reward.points {
            return Err(RedeemError::InsufficientPoints {
                shortfall: reward.points - self.points,
            });
        }
        self.points -= reward.points;
        Ok(())
    }

    pub fn level_progress(&self) -> u16 {
        level_progress(self.points)
    }

    pub fn points_to_next_level(&self) -> u32 {
        next_level_points(self.points) - self.points
    }
}

/// Toast describing a redemption attempt
pub fn redeem_toast(reward: &Reward, result: &Result<(), RedeemError>) -> Toast {
    match result {
        Ok(()) => Toast::success(
            "Reward Redeemed!",
            format!("You've successfully redeemed {}", reward.name),
        ),
        Err(e @ RedeemError::InsufficientPoints { .. }) => Toast::warning("Insufficient Points", e.to_string()),
        Err(e @ RedeemError::Unavailable(_)) => Toast::warning("Reward Unavailable", e.to_string()),
    }
}

/// Points, challenges, achievements and the rewards store
pub struct GamificationView {
    wallet: RewardsWallet,
    achievements: Vec<Achievement>,
    challenges: Vec<Challenge>,
    rewards: Vec<Reward>,
    selected: usize,
}

impl Default for GamificationView {
    fn default() -> Self {
        Self::new()
    }
}

impl GamificationView {
    pub fn new() -> Self {
        Self {
            wallet: RewardsWallet::default(),
            achievements: mock_data::achievements(),
            challenges: mock_data::challenges(),
            rewards: mock_data::rewards(),
            selected: 0,
        }
    }

    pub fn wallet(&self) -> &RewardsWallet {
        &self.wallet
    }
}

impl View for GamificationView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        render_title(f, chunks[0], "Health Rewards", "Earn points and unlock rewards for staying healthy");

        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Length(20), Constraint::Min(0)])
            .split(chunks[1]);
        let big = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        render_card(f, stats[0], "Total Points", vec![Line::from(Span::styled(self.wallet.points.to_string(), big))]);
        render_card(f, stats[1], "Current Level", vec![Line::from(Span::styled(self.wallet.level.to_string(), big))]);
        render_progress_bar(
            f,
            stats[2],
            self.wallet.level_progress(),
            &format!("Next Level: {} points", self.wallet.points_to_next_level()),
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        let challenges = self
            .challenges
            .iter()
            .flat_map(|c| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}  ", c.title), Style::default().add_modifier(Modifier::BOLD)),
                        badge(&format!("+{} pts", c.points), Tone::Accent),
                    ]),
                    Line::from(Span::styled(format!("  {}", c.description), Style::default().fg(Color::Gray))),
                    Line::from(format!("  {}  {} left", progress_text(c.progress.into(), 12), c.time_left)),
                ]
            })
            .collect();
        render_card(f, left[0], "Active Challenges", challenges);

        let achievements = self
            .achievements
            .iter()
            .map(|a| {
                let status = if a.completed {
                    Span::styled("✓ ", Style::default().fg(Color::Green))
                } else {
                    Span::styled(
                        format!("{}% ", a.progress.unwrap_or(0)),
                        Style::default().fg(Color::Yellow),
                    )
                };
                Line::from(vec![
                    status,
                    Span::styled(format!("{} ", a.title), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("({} pts) ", a.points), Style::default().fg(Color::Gray)),
                    Span::styled(a.description.clone(), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();
        render_card(f, left[1], "Achievements", achievements);

        let store = self
            .rewards
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let mut line = selectable_line(format!("{}  {} pts  ", r.name, r.points), i == self.selected);
                if !r.available {
                    line.spans.push(badge("Unavailable", Tone::Muted));
                } else if r.points > self.wallet.points {
                    line.spans.push(badge("Need more points", Tone::Warning));
                }
                line
            })
            .collect();
        render_card(f, columns[1], "Rewards Store", store);
    }

    fn get_title(&self) -> String {
        "Rewards".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} points • level {}", self.wallet.points, self.wallet.level)
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("↑/↓", "select reward"), ("Enter", "redeem")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.rewards.len().saturating_sub(1)),
            KeyCode::Enter => {
                let Some(reward) = self.rewards.get(self.selected) else {
                    return Ok(false);
                };
                let result = self.wallet.redeem(reward);
                info!("Redeem '{}': {:?}", reward.name, result);
                outbox.notify(redeem_toast(reward, &result));
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RewardKind;
    use assert_matches::assert_matches;

    fn reward(points: u32, available: bool) -> Reward {
        Reward {
            name: "Test Reward".to_string(),
            points,
            available,
            kind: RewardKind::Health,
        }
    }

    #[test]
    fn test_redeem_deducts_exact_cost() {
        let mut wallet = RewardsWallet::new(1250, 3);
        assert_eq!(wallet.redeem(&reward(500, true)), Ok(()));
        assert_eq!(wallet.points(), 750);

        assert_eq!(wallet.redeem(&reward(750, true)), Ok(()));
        assert_eq!(wallet.points(), 0);
    }

    #[test]
    fn test_redeem_insufficient_points() {
        let mut wallet = RewardsWallet::new(1250, 3);
        assert_eq!(
            wallet.redeem(&reward(1500, true)),
            Err(RedeemError::InsufficientPoints { shortfall: 250 })
        );
        assert_eq!(wallet.points(), 1250);
    }

    #[test]
    fn test_redeem_unavailable_reports_unavailable() {
        let mut wallet = RewardsWallet::new(5000, 3);
        assert_matches!(wallet.redeem(&reward(1500, false)), Err(RedeemError::Unavailable(_)));
        assert_eq!(wallet.points(), 5000);
    }

    #[test]
    fn test_level_numbers() {
        let wallet = RewardsWallet::default();
        assert_eq!(wallet.level_progress(), 50);
        assert_eq!(wallet.points_to_next_level(), 250);
    }

    #[test]
    fn test_redeem_toast_titles() {
        let r = reward(100, true);
        assert_eq!(redeem_toast(&r, &Ok(())).title, "Reward Redeemed!");
        let short = Err(RedeemError::InsufficientPoints { shortfall: 5 });
        assert_eq!(
            redeem_toast(&r, &short).message,
            "You need 5 more points to redeem this reward"
        );
    }
}
