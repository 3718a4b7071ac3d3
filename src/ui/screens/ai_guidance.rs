use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tracing::info;

use crate::mock_data;
use crate::models::{Insight, Priority, Recommendation};
use crate::ui::components::{badge, field_line, render_card, render_title, selectable_line, trend_span, Tone};
use crate::ui::state::Toast;
use crate::ui::view::{Outbox, View, ViewContext};

fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Critical,
        Priority::Medium => Tone::Warning,
        Priority::Low => Tone::Good,
    }
}

/// Toast confirming a recommendation's action
pub fn action_toast(recommendation: &Recommendation) -> Toast {
    Toast::success(
        "Action Taken",
        format!("{} for: {}", recommendation.action, recommendation.title),
    )
}

/// Fixture recommendations, insights and scheduling hints
pub struct AiGuidanceView {
    recommendations: Vec<Recommendation>,
    insights: Vec<Insight>,
    selected: usize,
}

impl Default for AiGuidanceView {
    fn default() -> Self {
        Self::new()
    }
}

impl AiGuidanceView {
    pub fn new() -> Self {
        Self {
            recommendations: mock_data::recommendations(),
            insights: mock_data::insights(),
            selected: 0,
        }
    }
}

impl View for AiGuidanceView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "AI Health Guidance",
            "Personalized recommendations powered by your health data",
        );

        let insight_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, 3); 3])
            .split(chunks[1]);
        for (insight, insight_area) in self.insights.iter().zip(insight_areas.iter()) {
            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", insight.value), Style::default().add_modifier(Modifier::BOLD)),
                    trend_span(insight.trend),
                ]),
                Line::from(Span::styled(insight.description, Style::default().fg(Color::Gray))),
            ];
            render_card(f, *insight_area, insight.title, lines);
        }

        let mut lines = Vec::new();
        for (i, rec) in self.recommendations.iter().enumerate() {
            let mut header = selectable_line(format!("{}  ", rec.title), i == self.selected);
            header.spans.push(badge(rec.priority.label(), priority_tone(rec.priority)));
            lines.push(header);
            lines.push(Line::from(Span::styled(
                format!("    {}", rec.description),
                Style::default().fg(Color::Gray),
            )));
            if let Some(location) = rec.location {
                lines.push(Line::from(Span::styled(format!("    📍 {}", location), Style::default().fg(Color::DarkGray))));
            }
            lines.push(Line::from(Span::styled(format!("    [{}]", rec.action), Style::default().fg(Color::Cyan))));
        }
        render_card(f, chunks[2], "Personalized Recommendations", lines);

        render_card(
            f,
            chunks[3],
            "Smart Health Scheduling",
            vec![
                field_line("Optimal Clinic Visit Time", "Tuesday 2:00 PM (shortest wait time)"),
                field_line("Medication Reminder", "8:00 AM & 8:00 PM (best adherence times)"),
            ],
        );
    }

    fn get_title(&self) -> String {
        "AI Guidance".to_string()
    }

    fn get_status(&self) -> String {
        let high = self
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .count();
        format!("{} recommendations • {} high priority", self.recommendations.len(), high)
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("↑/↓", "select"), ("Enter", "take action")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.recommendations.len().saturating_sub(1)),
            KeyCode::Enter => {
                let Some(rec) = self.recommendations.get(self.selected) else {
                    return Ok(false);
                };
                info!("Recommendation action: {}", rec.action);
                outbox.notify(action_toast(rec));
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::AppMessage;
    use chrono::Utc;

    #[test]
    fn test_action_toast_text() {
        let ctx = ViewContext::new(None, "en", Utc::now());
        let mut view = AiGuidanceView::new();
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Down, &ctx, &mut outbox).unwrap();
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();

        assert_eq!(
            outbox.drain(),
            vec![AppMessage::Notify(Toast::success(
                "Action Taken",
                "Set Reminder for: Medication Reminder"
            ))]
        );
    }
}
