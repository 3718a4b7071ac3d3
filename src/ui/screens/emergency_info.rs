use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::mock_data;
use crate::models::{EmergencyNumber, EmergencyProfile, Facility};
use crate::platform::SharePayload;
use crate::ui::components::{badge, field_line, render_card, render_title, selectable_line, Tone};
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};

pub const SHARE_TITLE: &str = "Emergency Health Information";
pub const AMBULANCE_NUMBER: &str = "108";

/// Something on the screen that can be called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialTarget {
    pub label: String,
    pub number: &'static str,
}

/// Critical health details, contacts, helplines and nearby facilities
pub struct EmergencyView {
    profile: EmergencyProfile,
    helplines: Vec<EmergencyNumber>,
    facilities: Vec<Facility>,
    targets: Vec<DialTarget>,
    selected: usize,
}

impl Default for EmergencyView {
    fn default() -> Self {
        Self::new()
    }
}

impl EmergencyView {
    pub fn new() -> Self {
        let profile = mock_data::emergency_profile();
        let helplines = mock_data::emergency_numbers();
        let facilities = mock_data::nearby_facilities();

        let targets = profile
            .emergency_contacts
            .iter()
            .map(|c| DialTarget {
                label: format!("{} ({})", c.name, c.relationship),
                number: c.phone,
            })
            .chain(helplines.iter().map(|h| DialTarget {
                label: h.service.to_string(),
                number: h.number,
            }))
            .chain(facilities.iter().map(|fac| DialTarget {
                label: fac.name.to_string(),
                number: fac.phone,
            }))
            .collect();

        Self {
            profile,
            helplines,
            facilities,
            targets,
            selected: 0,
        }
    }

    pub fn targets(&self) -> &[DialTarget] {
        &self.targets
    }

    pub fn selected_target(&self) -> Option<&DialTarget> {
        self.targets.get(self.selected)
    }

    fn target_line(&self, number: &str, text: String) -> Line<'static> {
        let selected = self.selected_target().map_or(false, |t| t.number == number);
        selectable_line(text, selected)
    }

    fn render_critical(&self, f: &mut Frame, area: Rect) {
        let p = &self.profile;
        let emphasis = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("PATIENT NAME: ", emphasis),
                Span::styled(p.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("   HEALTH ID: ", emphasis),
                Span::raw(p.health_id),
            ]),
            Line::from(vec![
                Span::styled("BLOOD GROUP: ", emphasis),
                Span::styled(p.blood_group, emphasis),
                Span::styled("   AGE: ", emphasis),
                Span::raw(p.age.to_string()),
            ]),
        ];
        if let Some(contact) = p.primary_contact() {
            lines.push(Line::from(vec![
                Span::styled("EMERGENCY CONTACT: ", emphasis),
                Span::styled(contact.phone, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {} ({})", contact.name, contact.relationship),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        if !p.allergies.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("⚠ ALLERGIES: ", emphasis),
                Span::styled(p.allergies.join(", "), emphasis),
            ]));
        }
        lines.push(Line::from(format!(
            "Language: {} • Insurance: {}",
            p.preferred_language, p.insurance_status
        )));
        render_card(f, area, "CRITICAL EMERGENCY INFORMATION", lines);
    }
}

impl View for EmergencyView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Emergency Information",
            "Critical health information for emergency situations",
        );
        self.render_critical(f, chunks[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[1]);

        let medical = vec![
            field_line("Conditions", &self.profile.chronic_conditions.join(", ")),
            field_line("Medications", &self.profile.current_medications.join(", ")),
        ];
        render_card(f, left[0], "Medical Conditions", medical);

        let contacts = self
            .profile
            .emergency_contacts
            .iter()
            .map(|c| {
                let mut line = self.target_line(c.phone, format!("{} ({}) {}  ", c.name, c.relationship, c.phone));
                if c.is_primary {
                    line.spans.push(badge("Primary", Tone::Critical));
                }
                line
            })
            .collect();
        render_card(f, left[1], "Emergency Contacts", contacts);

        let helplines = self
            .helplines
            .iter()
            .map(|h| self.target_line(h.number, format!("{:<5} {}: {}", h.number, h.service, h.description)))
            .collect();
        render_card(f, right[0], "Emergency Helplines", helplines);

        let facilities = self
            .facilities
            .iter()
            .flat_map(|fac| {
                let mut header = self.target_line(fac.phone, format!("{}  ", fac.name));
                if fac.emergency {
                    header.spans.push(badge("24/7 Emergency", Tone::Critical));
                }
                [
                    header,
                    Line::from(Span::styled(
                        format!("    {} • {} • {} • {}", fac.kind, fac.distance, fac.address, fac.phone),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, right[1], "Nearby Healthcare Facilities", facilities);
    }

    fn get_title(&self) -> String {
        "Emergency".to_string()
    }

    fn get_status(&self) -> String {
        match self.selected_target() {
            Some(target) => format!("Selected: {} {}", target.label, target.number),
            None => "Emergency information".to_string(),
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("a", "call 108"),
            ("s", "share"),
            ("c", "copy contact"),
            ("↑/↓", "select"),
            ("Enter", "call"),
        ]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Char('a') => outbox.push(AppMessage::Dial(AMBULANCE_NUMBER.to_string())),
            KeyCode::Char('s') => outbox.push(AppMessage::Share {
                payload: SharePayload::new(SHARE_TITLE, self.profile.share_text()),
                fallback_to_clipboard: true,
            }),
            KeyCode::Char('c') => {
                let Some(contact) = self.profile.primary_contact() else {
                    return Ok(false);
                };
                outbox.push(AppMessage::CopyToClipboard {
                    text: contact.phone.to_string(),
                    label: "Emergency contact".to_string(),
                });
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.targets.len().saturating_sub(1)),
            KeyCode::Enter => {
                let Some(target) = self.selected_target() else {
                    return Ok(false);
                };
                outbox.push(AppMessage::Dial(target.number.to_string()));
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
