use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::mock_data;
use crate::models::{MedicalRecord, MedicalRecordType};
use crate::ui::components::{
    badge, field_line, input_line, render_card, render_empty, render_tabs, render_title, selectable_line,
    status_tone, Tone,
};
use crate::ui::view::{Outbox, View, ViewContext};
use crate::utils::format_date;

/// Type tabs; `None` is "All Records"
pub const RECORD_TABS: [Option<MedicalRecordType>; 5] = [
    None,
    Some(MedicalRecordType::Consultation),
    Some(MedicalRecordType::Prescription),
    Some(MedicalRecordType::LabResult),
    Some(MedicalRecordType::Vaccination),
];

fn tab_label(tab: Option<MedicalRecordType>) -> &'static str {
    tab.map(MedicalRecordType::plural_label).unwrap_or("All Records")
}

/// Records matching both the type tab and the search term
pub fn filter_records<'a>(
    records: &'a [MedicalRecord],
    kind: Option<MedicalRecordType>,
    search: &str,
) -> Vec<&'a MedicalRecord> {
    records
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .filter(|r| r.matches_search(search))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Search,
    Detail,
    AddForm,
}

/// Searchable medical history with a detail pane
pub struct MedicalRecordsView {
    records: Vec<MedicalRecord>,
    tab: usize,
    search: String,
    selected: usize,
    mode: Mode,
}

impl MedicalRecordsView {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            records: mock_data::medical_records(now),
            tab: 0,
            search: String::new(),
            selected: 0,
            mode: Mode::Browse,
        }
    }

    pub fn visible(&self) -> Vec<&MedicalRecord> {
        filter_records(&self.records, RECORD_TABS[self.tab], &self.search)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Record open in the detail pane
    pub fn open_record(&self) -> Option<&MedicalRecord> {
        match self.mode {
            Mode::Detail => self.visible().get(self.selected).copied(),
            _ => None,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible().len().saturating_sub(1));
    }

    fn record_lines(record: &MedicalRecord, selected: bool) -> Vec<Line<'static>> {
        vec![
            selectable_line(format!("{}  [{}]", record.title, record.kind.label()), selected),
            Line::from(vec![
                Span::styled(
                    format!("    {} • {}  ", record.provider, format_date(record.date)),
                    Style::default().fg(Color::Gray),
                ),
                badge(record.status.label(), status_tone(record.status.label())),
            ]),
        ]
    }

    fn render_detail(&self, f: &mut Frame, area: Rect, record: &MedicalRecord) {
        let mut tags = vec![Span::styled("Tags: ", Style::default().fg(Color::Gray))];
        for tag in &record.tags {
            tags.push(badge(tag, Tone::Accent));
            tags.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(Span::styled(
                record.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field_line("Provider", &record.provider),
            field_line("Date", &format_date(record.date)),
            field_line("Location", &record.location),
            field_line("Status", record.status.label()),
            Line::from(""),
            field_line("Description", &record.description),
            Line::from(""),
            Line::from(tags),
            Line::from(""),
            Line::from(Span::styled("[Esc] Close", Style::default().fg(Color::Green))),
        ];
        render_card(f, area, record.kind.label(), lines);
    }

    fn render_add_form(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            input_line("Record Type", "Consultation", "", false),
            input_line("Date", "", "dd/mm/yyyy", false),
            input_line("Title", "", "Enter record title", false),
            input_line("Healthcare Provider", "", "Doctor/Clinic name", false),
            input_line("Location", "", "Clinic/Hospital location", false),
            input_line("Description", "", "Detailed description...", false),
            input_line("Attachments", "", "Upload is not available in the terminal", false),
            Line::from(""),
            Line::from(Span::styled("[Esc] Cancel", Style::default().fg(Color::Green))),
        ];
        render_card(f, area, "Add Medical Record", lines);
    }
}

impl View for MedicalRecordsView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(f, chunks[0], "Medical Records", "Your complete medical history in one secure place");

        let search = input_line("Search", &self.search, "Search medical records...", self.mode == Mode::Search);
        render_card(f, chunks[1], "Search", vec![search]);

        let titles: Vec<&str> = RECORD_TABS.iter().map(|t| tab_label(*t)).collect();
        render_tabs(f, chunks[2], &titles, self.tab);

        match self.mode {
            Mode::AddForm => return self.render_add_form(f, chunks[3]),
            Mode::Detail => {
                if let Some(record) = self.open_record() {
                    return self.render_detail(f, chunks[3], record);
                }
            }
            _ => {}
        }

        let visible = self.visible();
        if visible.is_empty() {
            let hint = if self.search.is_empty() {
                "No records found. Start by adding your first medical record"
            } else {
                "No records found. Try adjusting your search terms"
            };
            render_empty(f, chunks[3], hint);
            return;
        }

        let lines = visible
            .iter()
            .enumerate()
            .flat_map(|(i, record)| Self::record_lines(record, i == self.selected))
            .collect();
        render_card(f, chunks[3], tab_label(RECORD_TABS[self.tab]), lines);
    }

    fn get_title(&self) -> String {
        "Medical Records".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} of {} records", self.visible().len(), self.records.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            Mode::Search => vec![("type", "search"), ("Enter/Esc", "done")],
            Mode::Detail | Mode::AddForm => vec![("Esc", "close")],
            Mode::Browse => vec![("←/→", "type"), ("↑/↓", "select"), ("Enter", "open"), ("/", "search"), ("n", "add")],
        }
    }

    fn is_editing(&self) -> bool {
        self.mode == Mode::Search
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, _outbox: &mut Outbox) -> Result<bool> {
        match self.mode {
            Mode::Search => match key {
                KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Char(c) => self.search.push(c),
                KeyCode::Backspace => {
                    self.search.pop();
                }
                _ => return Ok(false),
            },
            Mode::Detail | Mode::AddForm => match key {
                KeyCode::Esc => self.mode = Mode::Browse,
                _ => return Ok(false),
            },
            Mode::Browse => match key {
                KeyCode::Left => self.tab = (self.tab + RECORD_TABS.len() - 1) % RECORD_TABS.len(),
                KeyCode::Right => self.tab = (self.tab + 1) % RECORD_TABS.len(),
                KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                KeyCode::Down => self.selected += 1,
                KeyCode::Char('/') => self.mode = Mode::Search,
                KeyCode::Char('n') => self.mode = Mode::AddForm,
                KeyCode::Esc if !self.search.is_empty() => self.search.clear(),
                KeyCode::Enter if !self.visible().is_empty() => self.mode = Mode::Detail,
                _ => return Ok(false),
            },
        }
        self.clamp_selection();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_combines_tab_and_search() {
        let records = mock_data::medical_records(Utc::now());

        assert_eq!(filter_records(&records, None, "").len(), 4);
        assert_eq!(filter_records(&records, None, "sharma").len(), 2);

        let hits = filter_records(&records, Some(MedicalRecordType::Prescription), "SHARMA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Hypertension Medication");

        assert!(filter_records(&records, Some(MedicalRecordType::Vaccination), "sharma").is_empty());
    }

    #[test]
    fn test_search_matches_description() {
        let records = mock_data::medical_records(Utc::now());
        let hits = filter_records(&records, None, "hemoglobin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, MedicalRecordType::LabResult);
    }

    #[test]
    fn test_search_mode_and_detail() {
        let now = Utc::now();
        let ctx = ViewContext::new(None, "en", now);
        let mut view = MedicalRecordsView::new(now);
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Char('/'), &ctx, &mut outbox).unwrap();
        assert!(view.is_editing());
        for c in "covid".chars() {
            view.handle_key(KeyCode::Char(c), &ctx, &mut outbox).unwrap();
        }
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert!(!view.is_editing());
        assert_eq!(view.visible().len(), 1);

        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert_eq!(view.open_record().map(|r| r.id.as_str()), Some("4"));

        view.handle_key(KeyCode::Esc, &ctx, &mut outbox).unwrap();
        assert!(view.open_record().is_none());
    }
}
