use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use serde_json::json;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::models::{RegistrationType, UserData};
use crate::platform::SharePayload;
use crate::ui::components::{badge, field_line, render_card, render_empty, render_tabs, render_title, Tone};
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};
use crate::utils::{format_date, title_case_token};

pub const SHARE_TITLE: &str = "Arogya Sarthi Health Card";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Card,
    Detailed,
}

/// JSON encoded into the card's QR code
pub fn qr_payload(user: &UserData, now: DateTime<Utc>) -> AppResult<String> {
    let payload = serde_json::to_string(&json!({
        "healthId": user.health_id,
        "name": user.name,
        "bloodGroup": user.blood_group,
        "emergencyContact": user.emergency_contact,
        "allergies": user.allergies,
        "chronicConditions": user.chronic_conditions,
        "timestamp": now.timestamp_millis(),
    }))?;
    Ok(payload)
}

pub fn share_payload(user: &UserData) -> SharePayload {
    SharePayload::new(SHARE_TITLE, format!("Health ID: {}", user.health_id))
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Digital health card with a detailed breakdown and QR payload
pub struct HealthCardView {
    mode: CardMode,
    show_qr: bool,
}

impl Default for HealthCardView {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCardView {
    pub fn new() -> Self {
        Self {
            mode: CardMode::Card,
            show_qr: false,
        }
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn show_qr(&self) -> bool {
        self.show_qr
    }

    fn render_card_mode(&self, f: &mut Frame, area: Rect, user: &UserData, now: DateTime<Utc>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(area);

        let tone = match user.registration_type {
            RegistrationType::Abha => Tone::Good,
            RegistrationType::Provisional => Tone::Warning,
        };
        let card = vec![
            Line::from(vec![
                Span::styled("Digital Health Card  ", Style::default().fg(Color::Gray)),
                badge(user.registration_type.badge(), tone),
            ]),
            Line::from(Span::styled(
                user.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} • Age: {}", title_case_token(&user.gender), user.age)),
            field_line("Blood Group", user.blood_group_or("Not specified")),
            field_line("Health ID", &user.health_id),
            field_line("Registration Date", &format_date(user.registration_date)),
            field_line("Emergency", &user.emergency_contact),
            field_line("Location", &user.current_state),
        ];
        render_card(f, chunks[0], "Arogya Sarthi", card);

        if self.show_qr {
            let payload = match qr_payload(user, now) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("QR payload could not be encoded: {}", e);
                    String::new()
                }
            };
            let lines = vec![
                Line::from(Span::styled("Scan for health info", Style::default().fg(Color::Gray))),
                Line::from(payload),
                Line::from(""),
                Line::from(Span::styled(
                    "Healthcare providers can scan this QR code to access your essential health information",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            render_card(f, chunks[1], "QR Code", lines);
        }
    }

    fn render_detailed(&self, f: &mut Frame, area: Rect, user: &UserData) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6), Constraint::Length(4)])
            .split(columns[1]);

        render_card(
            f,
            left[0],
            "Personal Information",
            vec![
                field_line("Full Name", &user.name),
                field_line("Health ID", &user.health_id),
                field_line("Age", &format!("{} years", user.age)),
                field_line("Gender", &title_case_token(&user.gender)),
                field_line("Blood Group", user.blood_group_or("Not specified")),
                field_line("Phone", &user.phone),
            ],
        );

        let mut emergency = vec![
            field_line("Emergency Contact", &user.emergency_contact),
            field_line("Blood Type", user.blood_group_or("Unknown")),
        ];
        if !user.allergies.is_empty() {
            emergency.push(Line::from(vec![
                Span::styled("Allergies: ", Style::default().fg(Color::Gray)),
                Span::styled(user.allergies.clone(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            ]));
        }
        render_card(f, left[1], "Emergency Information", emergency);

        let mut conditions = vec![if user.chronic_conditions.is_empty() {
            field_line("Chronic Conditions", "None reported")
        } else {
            let mut spans = vec![Span::styled("Chronic Conditions: ", Style::default().fg(Color::Gray))];
            for condition in &user.chronic_conditions {
                spans.push(badge(condition, Tone::Accent));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }];
        if !user.medications.is_empty() {
            conditions.push(field_line("Current Medications", &user.medications));
        }
        render_card(f, right[0], "Health Conditions", conditions);

        render_card(
            f,
            right[1],
            "Location Information",
            vec![
                field_line("Current Address", &user.current_address),
                field_line("Home State", &user.home_state),
                field_line("Current State", &user.current_state),
            ],
        );

        render_card(
            f,
            right[2],
            "Privacy Settings",
            vec![
                field_line("Healthcare Worker Access", enabled(user.health_worker_access)),
                field_line("Anonymous Data Sharing", enabled(user.data_sharing)),
            ],
        );
    }
}

impl View for HealthCardView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        render_title(
            f,
            chunks[0],
            "Your Health Card",
            "Digital health identification and emergency information",
        );

        let Some(user) = ctx.user else {
            render_empty(f, chunks[2], "No health profile yet. Complete registration to get your health card.");
            return;
        };

        let selected = match self.mode {
            CardMode::Card => 0,
            CardMode::Detailed => 1,
        };
        render_tabs(f, chunks[1], &["Card View", "Detailed View"], selected);

        match self.mode {
            CardMode::Card => self.render_card_mode(f, chunks[2], user, ctx.now),
            CardMode::Detailed => self.render_detailed(f, chunks[2], user),
        }
    }

    fn get_title(&self) -> String {
        "Health Card".to_string()
    }

    fn get_status(&self) -> String {
        match self.mode {
            CardMode::Card => "Card view".to_string(),
            CardMode::Detailed => "Detailed view".to_string(),
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("r", "QR code"), ("d", "details"), ("s", "share"), ("w", "download")]
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Char('r') => self.show_qr = !self.show_qr,
            KeyCode::Char('d') => {
                self.mode = match self.mode {
                    CardMode::Card => CardMode::Detailed,
                    CardMode::Detailed => CardMode::Card,
                };
            }
            KeyCode::Char('s') => match ctx.user {
                Some(user) => outbox.push(AppMessage::Share {
                    payload: share_payload(user),
                    fallback_to_clipboard: false,
                }),
                None => return Ok(false),
            },
            KeyCode::Char('w') => info!("Downloading health card PDF..."),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
