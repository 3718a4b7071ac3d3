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
use crate::models::{Consultation, ConsultationRecord, Doctor};
use crate::ui::components::{badge, render_card, render_tabs, render_title, selectable_line, status_tone, Tone};
use crate::ui::state::Toast;
use crate::ui::view::{Outbox, View, ViewContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsultationType {
    #[default]
    Video,
    Audio,
    Chat,
}

impl ConsultationType {
    pub fn label(self) -> &'static str {
        match self {
            ConsultationType::Video => "video",
            ConsultationType::Audio => "audio",
            ConsultationType::Chat => "chat",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ConsultationType::Video => ConsultationType::Audio,
            ConsultationType::Audio => ConsultationType::Chat,
            ConsultationType::Chat => ConsultationType::Video,
        }
    }
}

pub fn booking_toast(kind: ConsultationType, doctor: &Doctor, slot: &str) -> Toast {
    Toast::success(
        "Consultation Booked",
        format!(
            "Your {} consultation with {} is scheduled for {}",
            kind.label(),
            doctor.name,
            slot
        ),
    )
}

pub fn emergency_toast() -> Toast {
    Toast::warning(
        "Emergency Consultation Requested",
        "A doctor will connect with you within 5 minutes",
    )
}

const TABS: [&str; 3] = ["Book Consultation", "Upcoming", "History"];

/// Doctor booking, upcoming consultations and history
pub struct TelemedicineView {
    doctors: Vec<Doctor>,
    upcoming: Vec<Consultation>,
    history: Vec<ConsultationRecord>,
    consultation_type: ConsultationType,
    tab: usize,
    selected: usize,
}

impl Default for TelemedicineView {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemedicineView {
    pub fn new() -> Self {
        Self {
            doctors: mock_data::doctors(),
            upcoming: mock_data::upcoming_consultations(),
            history: mock_data::consultation_history(),
            consultation_type: ConsultationType::default(),
            tab: 0,
            selected: 0,
        }
    }

    pub fn consultation_type(&self) -> ConsultationType {
        self.consultation_type
    }

    fn render_booking(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(vec![
            Span::styled("Consultation type: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.consultation_type.label(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [t] change", Style::default().fg(Color::DarkGray)),
        ])];
        lines.push(Line::from(""));

        for (i, doctor) in self.doctors.iter().enumerate() {
            let mut header = selectable_line(format!("{}  ", doctor.name), i == self.selected);
            header.spans.push(badge(doctor.next_available, Tone::Good));
            lines.push(header);
            lines.push(Line::from(Span::styled(
                format!(
                    "    {} • {} • ★ {:.1} • ₹{}",
                    doctor.specialization, doctor.experience, doctor.rating, doctor.consultation_fee
                ),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                format!("    Languages: {}", doctor.languages.join(", ")),
                Style::default().fg(Color::DarkGray),
            )));
            let slots: Vec<String> = doctor
                .available_slots
                .iter()
                .enumerate()
                .map(|(n, slot)| format!("[{}] {}", n + 1, slot))
                .collect();
            lines.push(Line::from(Span::styled(
                format!("    {}", slots.join("  ")),
                Style::default().fg(Color::Green),
            )));
        }
        render_card(f, area, "Available Doctors", lines);
    }

    fn render_upcoming(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .upcoming
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled(format!("{}  ", c.doctor_name), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!("{} • {} {} • {}  ", c.kind, c.date, c.time, c.duration)),
                    badge(c.status, status_tone("confirmed")),
                ])
            })
            .collect();
        render_card(f, area, "Upcoming Consultations", lines);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .history
            .iter()
            .flat_map(|r| {
                [
                    Line::from(vec![
                        Span::styled(format!("{}  ", r.doctor_name), Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(r.date, Style::default().fg(Color::Gray)),
                        Span::styled(format!("  {}", "★".repeat(r.rating.into())), Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(format!("    Diagnosis: {}", r.diagnosis)),
                    Line::from(Span::styled(
                        format!("    Prescription: {}", r.prescription),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, area, "Consultation History", lines);
    }
}

impl View for TelemedicineView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(f, chunks[0], "Telemedicine", "Connect with doctors from anywhere, anytime");

        render_card(
            f,
            chunks[1],
            "Emergency Consultation",
            vec![
                Line::from("Need immediate medical help? Connect with a doctor within 5 minutes"),
                Line::from(Span::styled(
                    "[e] Start Emergency Consultation",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
            ],
        );

        render_tabs(f, chunks[2], &TABS, self.tab);
        match self.tab {
            0 => self.render_booking(f, chunks[3]),
            1 => self.render_upcoming(f, chunks[3]),
            _ => self.render_history(f, chunks[3]),
        }
    }

    fn get_title(&self) -> String {
        "Telemedicine".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} upcoming consultations", self.upcoming.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("←/→", "tabs"),
            ("↑/↓", "doctor"),
            ("1-3", "book slot"),
            ("t", "type"),
            ("e", "emergency"),
        ]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.doctors.len().saturating_sub(1)),
            KeyCode::Char('t') => self.consultation_type = self.consultation_type.next(),
            KeyCode::Char('e') => {
                info!("Emergency consultation requested");
                outbox.notify(emergency_toast());
            }
            KeyCode::Char(c @ '1'..='9') if self.tab == 0 => {
                let slot_index = c as usize - '1' as usize;
                let Some(doctor) = self.doctors.get(self.selected) else {
                    return Ok(false);
                };
                let Some(slot) = doctor.available_slots.get(slot_index) else {
                    return Ok(false);
                };
                info!("Booking {} with {} at {}", self.consultation_type.label(), doctor.name, slot);
                outbox.notify(booking_toast(self.consultation_type, doctor, slot));
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
