use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::mock_data;
use crate::models::{HealthStat, RecentActivity};
use crate::ui::components::{badge, render_card, render_title, status_tone};
use crate::ui::router::ViewId;
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};

/// Quick actions and the screen each key opens
pub const QUICK_ACTIONS: [(char, &str, ViewId); 4] = [
    ('c', "View Health Card", ViewId::HealthCard),
    ('a', "Add Record", ViewId::Tracking),
    ('e', "Emergency Info", ViewId::Emergency),
    ('f', "Find Healthcare", ViewId::Services),
];

/// Landing screen: health stats, quick actions, card preview and recent activity
pub struct DashboardView {
    stats: Vec<HealthStat>,
    activity: Vec<RecentActivity>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            stats: mock_data::dashboard_stats(),
            activity: mock_data::recent_activity(),
        }
    }
}

impl View for DashboardView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let (name, health_id) = match ctx.user {
            Some(user) => (user.name.as_str(), user.health_id.as_str()),
            None => ("राज Kumar", "AHS-2024-789456"),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(f, chunks[0], &format!("Welcome, {}", name), &format!("Health ID: {}", health_id));

        let stat_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[1]);
        for (stat, stat_area) in self.stats.iter().zip(stat_areas.iter()) {
            let lines = vec![Line::from(vec![
                Span::styled("● ", Style::default().fg(status_tone(stat.status).color())),
                Span::styled(stat.value, Style::default().add_modifier(Modifier::BOLD)),
            ])];
            render_card(f, *stat_area, stat.label, lines);
        }

        let mut actions = Vec::new();
        for (key, label, view) in QUICK_ACTIONS {
            actions.push(Span::styled(
                format!("[{}] ", key),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
            let style = if view == ViewId::Emergency {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            actions.push(Span::styled(format!("{}   ", label), style));
        }
        render_card(f, chunks[2], "Quick Actions", vec![Line::from(actions)]);

        let card = match ctx.user {
            Some(user) => vec![
                Line::from(vec![
                    Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    badge(user.registration_type.badge(), status_tone("good")),
                ]),
                Line::from(format!(
                    "{} • Age: {} • Blood Type: {}",
                    user.gender,
                    user.age,
                    user.blood_group_or("Not specified")
                )),
                Line::from(format!("Emergency Contact: {}", user.emergency_contact)),
            ],
            None => vec![
                Line::from(Span::styled("राज Kumar", Style::default().add_modifier(Modifier::BOLD))),
                Line::from("Male • Age: 28 • Blood Type: O+ • Health ID: AHS-789456"),
                Line::from("Emergency Contact: +91 98765 43210"),
            ],
        };
        render_card(f, chunks[3], "Your Health Card", card);

        let lines = self
            .activity
            .iter()
            .flat_map(|activity| {
                [
                    Line::from(vec![
                        Span::styled(activity.title, Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(format!("  {}", activity.date), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", activity.provider),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, chunks[4], "Recent Health Activity", lines);
    }

    fn get_title(&self) -> String {
        "Dashboard".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} recent activities", self.activity.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("c", "card"), ("a", "add record"), ("e", "emergency"), ("f", "find care")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        let KeyCode::Char(c) = key else {
            return Ok(false);
        };

        match QUICK_ACTIONS.iter().find(|(k, _, _)| *k == c) {
            Some((_, _, view)) => {
                outbox.push(AppMessage::ChangeView(*view));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
