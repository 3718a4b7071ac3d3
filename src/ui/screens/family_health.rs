use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tracing::debug;

use crate::mock_data;
use crate::models::{FamilyMember, FamilyStats, HealthStatus};
use crate::ui::components::{badge, field_line, input_line, render_card, render_empty, render_title, selectable_line, Tone};
use crate::ui::view::{Outbox, View, ViewContext};
use crate::utils::checkup_label;

fn status_tone(status: HealthStatus) -> Tone {
    match status {
        HealthStatus::Good => Tone::Good,
        HealthStatus::Monitoring => Tone::Warning,
        HealthStatus::NeedsAttention => Tone::Critical,
    }
}

/// Household members with expandable health details
pub struct FamilyHealthView {
    members: Vec<FamilyMember>,
    selected: usize,
    expanded: Option<String>,
    show_add_form: bool,
}

impl FamilyHealthView {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            members: mock_data::family_members(now),
            selected: 0,
            expanded: None,
            show_add_form: false,
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> FamilyStats {
        FamilyStats::compute(&self.members, now)
    }

    fn member_lines(&self, member: &FamilyMember, selected: bool, now: DateTime<Utc>) -> Vec<Line<'static>> {
        let mut header = selectable_line(format!("{}  ", member.name), selected);
        header.spans.push(badge(member.health_status.label(), status_tone(member.health_status)));

        let mut lines = vec![
            header,
            Line::from(Span::styled(
                format!("    {} • Age {}", member.relationship, member.age),
                Style::default().fg(Color::Gray),
            )),
            Line::from(format!(
                "    Blood Group: {}   Last Checkup: {}",
                member.blood_group.as_deref().unwrap_or("Unknown"),
                checkup_label(member.days_since_checkup(now)),
            )),
        ];

        if !member.chronic_conditions.is_empty() {
            let mut spans = vec![Span::styled("    Conditions: ", Style::default().fg(Color::Gray))];
            for condition in &member.chronic_conditions {
                spans.push(badge(condition, Tone::Muted));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        if self.expanded.as_deref() == Some(member.id.as_str()) {
            if let Some(contact) = &member.emergency_contact {
                lines.push(Line::from(format!("    ☎ {}", contact)));
            }
            if !member.allergies.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("    Allergies: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        member.allergies.join(", "),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            lines.push(Line::from(Span::styled(
                "    [View Records]  [Add Entry]",
                Style::default().fg(Color::Cyan),
            )));
        }
        lines.push(Line::from(""));
        lines
    }

    fn render_add_form(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            input_line("Full Name", "", "Enter full name", false),
            input_line("Relationship", "", "Select relationship", false),
            input_line("Age", "", "Age", false),
            input_line("Gender", "", "Select gender", false),
            input_line("Blood Group", "", "Select blood group", false),
            input_line("Emergency Contact", "", "+91 XXXXX XXXXX", false),
            Line::from(""),
            Line::from(Span::styled("[Enter] Add Member   [Esc] Cancel", Style::default().fg(Color::Green))),
        ];
        render_card(f, area, "Add Family Member", lines);
    }
}

impl View for FamilyHealthView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        render_title(f, chunks[0], "Family Health", "Manage health records for your entire family");

        let stats = self.stats(ctx.now);
        let stat_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[1]);
        let counters = [
            ("Family Members", stats.total, Color::Cyan),
            ("Need Attention", stats.needs_attention, Color::Red),
            ("Monitoring", stats.monitoring, Color::Yellow),
            ("Checkup Overdue", stats.overdue, Color::Magenta),
        ];
        for ((label, count, color), stat_area) in counters.into_iter().zip(stat_areas.iter()) {
            let line = Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            render_card(f, *stat_area, label, vec![line]);
        }

        if self.show_add_form {
            self.render_add_form(f, chunks[2]);
        } else if self.members.is_empty() {
            render_empty(
                f,
                chunks[2],
                "No family members added. Start by adding your family members to manage their health records",
            );
        } else {
            let lines = self
                .members
                .iter()
                .enumerate()
                .flat_map(|(i, m)| self.member_lines(m, i == self.selected, ctx.now))
                .collect();
            render_card(f, chunks[2], "Family Members", lines);
        }

        render_card(
            f,
            chunks[3],
            "Quick Family Actions",
            vec![field_line("Schedule Checkups • Family Report • Health Reminders", "coming soon")],
        );
    }

    fn get_title(&self) -> String {
        "Family Health".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} family members", self.members.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.show_add_form {
            vec![("Enter", "add"), ("Esc", "cancel")]
        } else {
            vec![("↑/↓", "select"), ("Enter", "details"), ("n", "add member")]
        }
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, _outbox: &mut Outbox) -> Result<bool> {
        if self.show_add_form {
            match key {
                KeyCode::Enter | KeyCode::Esc => {
                    // The form is display only, nothing is added
                    debug!("Add family member form closed");
                    self.show_add_form = false;
                    return Ok(true);
                }
                _ => return Ok(false),
            }
        }

        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.members.len().saturating_sub(1)),
            KeyCode::Enter => {
                let Some(member) = self.members.get(self.selected) else {
                    return Ok(false);
                };
                self.expanded = match &self.expanded {
                    Some(id) if *id == member.id => None,
                    _ => Some(member.id.clone()),
                };
            }
            KeyCode::Char('n') => self.show_add_form = true,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_stats() {
        let now = Utc::now();
        let view = FamilyHealthView::new(now);
        let stats = view.stats(now);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.needs_attention, 1);
        assert_eq!(stats.monitoring, 1);
        assert_eq!(stats.overdue, 0);
    }

    #[test]
    fn test_enter_toggles_expansion() {
        let now = Utc::now();
        let ctx = ViewContext::new(None, "en", now);
        let mut view = FamilyHealthView::new(now);
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Down, &ctx, &mut outbox).unwrap();
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert_eq!(view.expanded(), Some("2"));

        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert_eq!(view.expanded(), None);
    }

    #[test]
    fn test_add_form_changes_nothing() {
        let now = Utc::now();
        let ctx = ViewContext::new(None, "en", now);
        let mut view = FamilyHealthView::new(now);
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Char('n'), &ctx, &mut outbox).unwrap();
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert_eq!(view.stats(now).total, 3);
        assert!(outbox.is_empty());
    }
}
