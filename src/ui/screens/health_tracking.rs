use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tracing::info;

use crate::mock_data;
use crate::models::{latest_reading, HealthRecord, HealthRecordType, Medication, ReadingStatus};
use crate::ui::components::{badge, input_line, render_card, render_tabs, render_title, status_tone, Tone};
use crate::ui::layout::ViewLayout;
use crate::ui::view::{Outbox, View, ViewContext};
use crate::utils::{format_date_time, format_time};

/// Types summarized on the overview
pub const VITAL_TYPES: [HealthRecordType; 3] = [
    HealthRecordType::BloodPressure,
    HealthRecordType::BloodSugar,
    HealthRecordType::Weight,
];

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingTab {
    Overview,
    Medications,
    History,
}

impl TrackingTab {
    const ALL: [TrackingTab; 3] = [TrackingTab::Overview, TrackingTab::Medications, TrackingTab::History];

    fn title(self) -> &'static str {
        match self {
            TrackingTab::Overview => "Overview",
            TrackingTab::Medications => "Medications",
            TrackingTab::History => "History",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Latest value per vital, "--" when none was recorded
pub fn vital_summary(records: &[HealthRecord]) -> Vec<(HealthRecordType, String)> {
    VITAL_TYPES
        .iter()
        .map(|kind| {
            let value = latest_reading(records, *kind)
                .map(|r| format!("{} {}", r.value, r.unit))
                .unwrap_or_else(|| "--".to_string());
            (*kind, value)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftField {
    Kind,
    Value,
    Notes,
}

/// Reading being typed into the add form
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingDraft {
    pub kind: HealthRecordType,
    pub value: String,
    pub notes: String,
    focus: DraftField,
}

impl Default for ReadingDraft {
    fn default() -> Self {
        Self {
            kind: HealthRecordType::BloodPressure,
            value: String::new(),
            notes: String::new(),
            focus: DraftField::Kind,
        }
    }
}

impl ReadingDraft {
    fn cycle_kind(&mut self, forward: bool) {
        let all = HealthRecordType::TRACKABLE;
        let i = all.iter().position(|k| *k == self.kind).unwrap_or(0);
        self.kind = if forward {
            all[(i + 1) % all.len()]
        } else {
            all[(i + all.len() - 1) % all.len()]
        };
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            DraftField::Kind => None,
            DraftField::Value => Some(&mut self.value),
            DraftField::Notes => Some(&mut self.notes),
        }
    }
}

/// Vitals overview, medication schedule and reading history
pub struct HealthTrackingView {
    tab: TrackingTab,
    records: Vec<HealthRecord>,
    medications: Vec<Medication>,
    draft: Option<ReadingDraft>,
}

impl HealthTrackingView {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            tab: TrackingTab::Overview,
            records: mock_data::health_records(now),
            medications: mock_data::medications(now),
            draft: None,
        }
    }

    pub fn tab(&self) -> TrackingTab {
        self.tab
    }

    pub fn records(&self) -> &[HealthRecord] {
        &self.records
    }

    pub fn draft(&self) -> Option<&ReadingDraft> {
        self.draft.as_ref()
    }

    fn reading_lines(record: &HealthRecord, when: String) -> Vec<Line<'static>> {
        let status = record.status.unwrap_or(ReadingStatus::Normal);
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{:<16}", record.kind.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{} {}  ", record.value, record.unit), Style::default().fg(Color::White)),
            badge(status.label(), status_tone(status.label())),
            Span::styled(format!("  {}", when), Style::default().fg(Color::DarkGray)),
        ])];
        if let Some(notes) = &record.notes {
            lines.push(Line::from(Span::styled(format!("  {}", notes), Style::default().fg(Color::Gray))));
        }
        lines
    }

    fn render_overview(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let vital_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[0]);
        for ((kind, value), vital_area) in vital_summary(&self.records).into_iter().zip(vital_areas.iter()) {
            let line = Line::from(Span::styled(value, Style::default().add_modifier(Modifier::BOLD)));
            render_card(f, *vital_area, kind.label(), vec![line]);
        }

        let mut lines: Vec<Line<'static>> = self
            .records
            .iter()
            .take(RECENT_LIMIT)
            .flat_map(|r| Self::reading_lines(r, format_date_time(r.timestamp)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[h] View All Records   [n] Add Reading",
            Style::default().fg(Color::Green),
        )));
        render_card(f, chunks[1], "Recent Readings", lines);
    }

    fn render_medications(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for med in &self.medications {
            let (status, tone) = if med.taken { ("Taken", Tone::Good) } else { ("Pending", Tone::Muted) };
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", med.name), Style::default().add_modifier(Modifier::BOLD)),
                badge(status, tone),
            ]));
            lines.push(Line::from(format!("  {} • {}", med.dosage, med.frequency)));
            lines.push(Line::from(Span::styled(
                format!("  Take at: {}   Next: {}", med.time_to_take, format_time(med.next_due)),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }
        render_card(f, area, "Today's Medications", lines);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .records
            .iter()
            .flat_map(|r| Self::reading_lines(r, format_date_time(r.timestamp)))
            .collect();
        render_card(f, area, "Health Records History", lines);
    }

    fn render_draft(&self, f: &mut Frame, area: Rect, draft: &ReadingDraft) {
        let lines = vec![
            input_line(
                "Type",
                &format!("◀ {} ▶", draft.kind.label()),
                "",
                draft.focus == DraftField::Kind,
            ),
            input_line(
                &format!("Value ({})", draft.kind.unit()),
                &draft.value,
                draft.kind.placeholder(),
                draft.focus == DraftField::Value,
            ),
            input_line("Notes", &draft.notes, "Any additional notes...", draft.focus == DraftField::Notes),
            Line::from(""),
            Line::from(Span::styled("[Enter] Save Reading   [Esc] Cancel", Style::default().fg(Color::Green))),
        ];
        render_card(f, area, "Add Health Reading", lines);
    }

    fn handle_draft_key(&mut self, key: KeyCode) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };

        match key {
            KeyCode::Esc => self.draft = None,
            KeyCode::Enter => {
                // Readings are not stored, the draft is only logged
                info!(
                    "Adding new health record: {} = '{}' ({})",
                    draft.kind.label(),
                    draft.value,
                    draft.notes
                );
                self.draft = None;
            }
            KeyCode::Up => {
                draft.focus = match draft.focus {
                    DraftField::Kind | DraftField::Value => DraftField::Kind,
                    DraftField::Notes => DraftField::Value,
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                draft.focus = match draft.focus {
                    DraftField::Kind => DraftField::Value,
                    DraftField::Value | DraftField::Notes => DraftField::Notes,
                }
            }
            KeyCode::Left if draft.focus == DraftField::Kind => draft.cycle_kind(false),
            KeyCode::Right if draft.focus == DraftField::Kind => draft.cycle_kind(true),
            KeyCode::Char(c) => {
                if let Some(text) = draft.focused_text() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = draft.focused_text() {
                    text.pop();
                }
            }
            _ => return false,
        }
        true
    }
}

impl View for HealthTrackingView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let layout = ViewLayout::with_tabs(area);

        render_title(f, layout.title, "Health Tracking", "Monitor your vitals and medications");
        if let Some(tabs) = layout.tabs {
            let titles: Vec<&str> = TrackingTab::ALL.iter().map(|t| t.title()).collect();
            render_tabs(f, tabs, &titles, self.tab.index());
        }

        let content = layout.main_content;
        if let Some(draft) = &self.draft {
            self.render_draft(f, content, draft);
            return;
        }

        match self.tab {
            TrackingTab::Overview => self.render_overview(f, content),
            TrackingTab::Medications => self.render_medications(f, content),
            TrackingTab::History => self.render_history(f, content),
        }
    }

    fn get_title(&self) -> String {
        "Health Tracking".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} readings • {} medications", self.records.len(), self.medications.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.draft.is_some() {
            vec![("↑/↓", "field"), ("←/→", "type"), ("Enter", "save"), ("Esc", "cancel")]
        } else {
            vec![("←/→", "tabs"), ("n", "add reading"), ("h", "history")]
        }
    }

    fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, _outbox: &mut Outbox) -> Result<bool> {
        if self.draft.is_some() {
            return Ok(self.handle_draft_key(key));
        }

        let index = self.tab.index();
        let count = TrackingTab::ALL.len();
        match key {
            KeyCode::Left => self.tab = TrackingTab::ALL[(index + count - 1) % count],
            KeyCode::Right => self.tab = TrackingTab::ALL[(index + 1) % count],
            KeyCode::Char('h') => self.tab = TrackingTab::History,
            KeyCode::Char('n') => self.draft = Some(ReadingDraft::default()),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_vital_summary_uses_latest_reading() {
        let now = Utc::now();
        let summary = vital_summary(&mock_data::health_records(now));
        assert_eq!(summary[0], (HealthRecordType::BloodPressure, "120/80 mmHg".to_string()));
        assert_eq!(summary[1], (HealthRecordType::BloodSugar, "95 mg/dL".to_string()));
        assert_eq!(summary[2], (HealthRecordType::Weight, "68 kg".to_string()));
    }

    #[test]
    fn test_vital_summary_missing_type() {
        let now = Utc::now();
        let records = vec![HealthRecord {
            id: "1".to_string(),
            kind: HealthRecordType::BloodPressure,
            value: "110/70".to_string(),
            unit: "mmHg".to_string(),
            notes: None,
            timestamp: now - Duration::hours(1),
            status: None,
        }];
        let summary = vital_summary(&records);
        assert_eq!(summary[1].1, "--");
        assert_eq!(summary[2].1, "--");
    }

    #[test]
    fn test_add_reading_is_discarded() {
        let now = Utc::now();
        let ctx = ViewContext::new(None, "en", now);
        let mut view = HealthTrackingView::new(now);
        let mut outbox = Outbox::new();
        let before = view.records().len();

        view.handle_key(KeyCode::Char('n'), &ctx, &mut outbox).unwrap();
        assert!(view.is_editing());
        view.handle_key(KeyCode::Right, &ctx, &mut outbox).unwrap();
        view.handle_key(KeyCode::Down, &ctx, &mut outbox).unwrap();
        for c in "101".chars() {
            view.handle_key(KeyCode::Char(c), &ctx, &mut outbox).unwrap();
        }
        assert_eq!(view.draft().map(|d| d.kind), Some(HealthRecordType::BloodSugar));
        assert_eq!(view.draft().map(|d| d.value.as_str()), Some("101"));

        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert!(view.draft().is_none());
        assert_eq!(view.records().len(), before);
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_tab_cycling() {
        let now = Utc::now();
        let ctx = ViewContext::new(None, "en", now);
        let mut view = HealthTrackingView::new(now);
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Left, &ctx, &mut outbox).unwrap();
        assert_eq!(view.tab(), TrackingTab::History);
        view.handle_key(KeyCode::Right, &ctx, &mut outbox).unwrap();
        assert_eq!(view.tab(), TrackingTab::Overview);
    }
}
