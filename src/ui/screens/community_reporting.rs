use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::mock_data;
use crate::models::{CommunityReport, HealthAlert, ReportStatus, ReportType, Severity};
use crate::ui::components::{
    badge, input_line, render_card, render_tabs, render_title, selectable_line, Tone,
};
use crate::ui::state::Toast;
use crate::ui::view::{Outbox, View, ViewContext};

const TABS: [&str; 3] = ["Report Issue", "Community Reports", "Health Trends"];

const LOCATION_PLACEHOLDER: &str = "e.g., Worker dormitory, Industrial area, Kochi";
const DESCRIPTION_PLACEHOLDER: &str = "Describe the health issue, symptoms observed, or facility problems...";

const TRENDS: [(&str, &str); 3] = [
    ("Respiratory Issues", "Trending upward in industrial areas"),
    ("Water Quality", "Improved after recent interventions"),
    ("Healthcare Access", "New mobile clinics showing positive impact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A report that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSubmission {
    pub kind: ReportType,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Kind,
    Location,
    Description,
}

impl ReportField {
    const ALL: [ReportField; 3] = [ReportField::Kind, ReportField::Location, ReportField::Description];
}

/// Anonymous report form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub kind: ReportType,
    pub location: String,
    pub description: String,
}

impl ReportForm {
    /// Validate and take the entered text. Location and description are
    /// cleared on success; the report type is kept. Nothing changes on error.
    pub fn submit(&mut self) -> Result<ReportSubmission, ReportError> {
        if self.location.trim().is_empty() {
            return Err(ReportError::MissingField("location"));
        }
        if self.description.trim().is_empty() {
            return Err(ReportError::MissingField("description"));
        }

        Ok(ReportSubmission {
            kind: self.kind,
            location: std::mem::take(&mut self.location),
            description: std::mem::take(&mut self.description),
        })
    }

    pub fn cycle_kind(&mut self, step: isize) {
        let all = ReportType::ALL;
        let current = all.iter().position(|k| *k == self.kind).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(all.len() as isize) as usize;
        self.kind = all[next];
    }
}

fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::High => Tone::Critical,
        Severity::Medium => Tone::Warning,
        Severity::Low => Tone::Accent,
    }
}

fn status_tone(status: ReportStatus) -> Tone {
    match status {
        ReportStatus::Investigating => Tone::Warning,
        ReportStatus::Confirmed => Tone::Critical,
        ReportStatus::Resolved => Tone::Good,
    }
}

/// Anonymous health reports, community reports and area alerts
pub struct ReportingView {
    form: ReportForm,
    editing: bool,
    focus: usize,
    tab: usize,
    selected: usize,
    reports: Vec<CommunityReport>,
    alerts: Vec<HealthAlert>,
}

impl Default for ReportingView {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportingView {
    pub fn new() -> Self {
        Self {
            form: ReportForm::default(),
            editing: false,
            focus: 0,
            tab: 0,
            selected: 0,
            reports: mock_data::community_reports(),
            alerts: mock_data::health_alerts(),
        }
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn focused_field(&self) -> ReportField {
        ReportField::ALL[self.focus]
    }

    fn submit(&mut self, outbox: &mut Outbox) {
        match self.form.submit() {
            Ok(report) => {
                info!("Anonymous {} report submitted for {}", report.kind.label(), report.location);
                outbox.notify(Toast::success(
                    "Report Submitted",
                    "Your anonymous report has been submitted to health authorities",
                ));
                self.editing = false;
                self.focus = 0;
            }
            Err(e) => {
                debug!("Report rejected: {}", e);
                outbox.notify(Toast::warning("Missing Information", "Please fill in all required fields"));
            }
        }
    }

    fn render_alerts(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .alerts
            .iter()
            .flat_map(|a| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}  ", a.title), Style::default().add_modifier(Modifier::BOLD)),
                        badge(a.severity.label(), severity_tone(a.severity)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {} • {} • {}", a.description, a.area, a.date.format("%d/%m/%Y")),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, area, "Active Health Alerts", lines);
    }

    fn render_form(&self, f: &mut Frame, area: Rect) {
        let focused = |field: ReportField| self.editing && self.focused_field() == field;
        let mut lines = vec![
            Line::from(Span::styled(
                "Help keep your community healthy by reporting health issues. All reports are anonymous.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            input_line("Report Type", self.form.kind.label(), "", focused(ReportField::Kind)),
            input_line("Location", &self.form.location, LOCATION_PLACEHOLDER, focused(ReportField::Location)),
            input_line(
                "Description",
                &self.form.description,
                DESCRIPTION_PLACEHOLDER,
                focused(ReportField::Description),
            ),
            Line::from(""),
        ];
        let hint = if self.editing {
            "[Enter] Submit Report  [Esc] Close"
        } else {
            "[n] Start a report"
        };
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::Cyan))));
        render_card(f, area, "Submit Anonymous Health Report", lines);
    }

    fn render_reports(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .reports
            .iter()
            .enumerate()
            .flat_map(|(i, r)| {
                let mut head = selectable_line(format!("{}  ", r.title), i == self.selected);
                head.spans.push(badge(r.kind.label(), Tone::Accent));
                head.spans.push(Span::raw(" "));
                head.spans.push(badge(r.status.label(), status_tone(r.status)));
                head.spans.push(Span::raw(" "));
                head.spans.push(badge(r.severity.label(), severity_tone(r.severity)));
                [
                    head,
                    Line::from(format!("  {}", r.description)),
                    Line::from(Span::styled(
                        format!(
                            "  {} • {} • {} • ▲ {}",
                            r.location,
                            r.reported_by,
                            r.date.format("%d/%m/%Y"),
                            r.upvotes
                        ),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, area, "Recent Community Reports", lines);
    }

    fn render_trends(&self, f: &mut Frame, area: Rect) {
        let lines = TRENDS
            .iter()
            .flat_map(|(title, detail)| {
                [
                    Line::from(Span::styled(*title, Style::default().add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled(format!("  {}", detail), Style::default().fg(Color::Gray))),
                ]
            })
            .collect();
        render_card(f, area, "Health Trend Analysis", lines);
    }
}

impl View for ReportingView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let alert_height = (self.alerts.len() * 2 + 2) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(alert_height),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Community Health Reporting",
            "Report health issues and track community health trends",
        );
        self.render_alerts(f, chunks[1]);
        render_tabs(f, chunks[2], &TABS, self.tab);

        match self.tab {
            0 => self.render_form(f, chunks[3]),
            1 => self.render_reports(f, chunks[3]),
            _ => self.render_trends(f, chunks[3]),
        }
    }

    fn get_title(&self) -> String {
        "Reporting".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} active alerts • {} reports", self.alerts.len(), self.reports.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.editing {
            vec![("↑/↓", "field"), ("←/→", "type"), ("Enter", "submit"), ("Esc", "close")]
        } else {
            vec![("←/→", "tabs"), ("n", "new report")]
        }
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        if self.editing {
            let fields = ReportField::ALL.len();
            let field = self.focused_field();
            match key {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter => self.submit(outbox),
                KeyCode::Down | KeyCode::Tab => self.focus = (self.focus + 1) % fields,
                KeyCode::Up | KeyCode::BackTab => self.focus = (self.focus + fields - 1) % fields,
                KeyCode::Left if field == ReportField::Kind => self.form.cycle_kind(-1),
                KeyCode::Right if field == ReportField::Kind => self.form.cycle_kind(1),
                KeyCode::Char(c) => match field {
                    ReportField::Kind => return Ok(false),
                    ReportField::Location => self.form.location.push(c),
                    ReportField::Description => self.form.description.push(c),
                },
                KeyCode::Backspace => match field {
                    ReportField::Kind => return Ok(false),
                    ReportField::Location => {
                        self.form.location.pop();
                    }
                    ReportField::Description => {
                        self.form.description.pop();
                    }
                },
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match key {
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Char('n') => {
                self.tab = 0;
                self.editing = true;
            }
            KeyCode::Up if self.tab == 1 => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down if self.tab == 1 => {
                self.selected = (self.selected + 1).min(self.reports.len().saturating_sub(1))
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
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_rejects_blank_fields() {
        let mut form = ReportForm {
            location: "Kochi".to_string(),
            description: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.submit(), Err(ReportError::MissingField("description")));
        assert_eq!(form.location, "Kochi");

        form.location.clear();
        assert_matches!(form.submit(), Err(ReportError::MissingField("location")));
    }

    #[test]
    fn test_submit_clears_text_keeps_type() {
        let mut form = ReportForm {
            kind: ReportType::WaterQuality,
            location: "Aluva".to_string(),
            description: "Cloudy water".to_string(),
        };

        let report = form.submit().unwrap();
        assert_eq!(report.kind, ReportType::WaterQuality);
        assert_eq!(report.location, "Aluva");
        assert_eq!(form.kind, ReportType::WaterQuality);
        assert!(form.location.is_empty());
        assert!(form.description.is_empty());
    }

    #[test]
    fn test_cycle_kind_wraps() {
        let mut form = ReportForm::default();
        form.cycle_kind(-1);
        assert_eq!(form.kind, ReportType::Facility);
        form.cycle_kind(1);
        assert_eq!(form.kind, ReportType::HealthIssue);
    }

    #[test]
    fn test_keyboard_submission_toasts() {
        let ctx = ViewContext::new(None, "en", chrono::Utc::now());
        let mut view = ReportingView::new();
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Char('n'), &ctx, &mut outbox).unwrap();
        assert!(view.is_editing());
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert_matches!(
            outbox.drain().as_slice(),
            [AppMessage::Notify(t)] if t.title == "Missing Information"
        );

        view.handle_key(KeyCode::Down, &ctx, &mut outbox).unwrap();
        for c in "Kochi".chars() {
            view.handle_key(KeyCode::Char(c), &ctx, &mut outbox).unwrap();
        }
        view.handle_key(KeyCode::Down, &ctx, &mut outbox).unwrap();
        for c in "Fever".chars() {
            view.handle_key(KeyCode::Char(c), &ctx, &mut outbox).unwrap();
        }
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();

        assert_matches!(
            outbox.drain().as_slice(),
            [AppMessage::Notify(t)] if t.title == "Report Submitted"
        );
        assert!(view.form().location.is_empty());
        assert!(!view.is_editing());
    }
}
