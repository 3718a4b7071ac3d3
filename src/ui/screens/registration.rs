//! Five-step onboarding wizard that produces the user's profile

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::{info, warn};

use crate::health_id::resolve_health_id;
use crate::mock_data::{BLOOD_GROUPS, COMMON_CONDITIONS, DEFAULT_CURRENT_STATE, GENDERS, INDIAN_STATES};
use crate::models::{InsuranceStatus, RegistrationType, UserData};
use crate::ui::components::{field_line, input_line};
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    RegistrationType,
    PersonalInfo,
    Location,
    HealthInfo,
    Privacy,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::RegistrationType,
        WizardStep::PersonalInfo,
        WizardStep::Location,
        WizardStep::HealthInfo,
        WizardStep::Privacy,
    ];

    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::RegistrationType => "Registration Type",
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Location => "Location",
            WizardStep::HealthInfo => "Health Info",
            WizardStep::Privacy => "Privacy",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self as usize + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        (self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Digits,
    Choice,
    Toggle,
    Checklist,
}

/// Every input the wizard writes into `RegistrationForm`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    RegistrationType,
    AbhaNumber,
    AadhaarNumber,
    Name,
    Age,
    Gender,
    BloodGroup,
    Phone,
    EmergencyContact,
    CurrentAddress,
    HomeState,
    InsuranceStatus,
    ChronicConditions,
    Allergies,
    Medications,
    HealthWorkerAccess,
    DataSharing,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::RegistrationType => "Registration Type",
            FormField::AbhaNumber => "ABHA Number",
            FormField::AadhaarNumber => "Aadhaar Number (for verification)",
            FormField::Name => "Full Name *",
            FormField::Age => "Age *",
            FormField::Gender => "Gender *",
            FormField::BloodGroup => "Blood Group",
            FormField::Phone => "Phone Number *",
            FormField::EmergencyContact => "Emergency Contact",
            FormField::CurrentAddress => "Current Address in Kerala",
            FormField::HomeState => "Home State",
            FormField::InsuranceStatus => "Insurance Status",
            FormField::ChronicConditions => "Chronic Conditions",
            FormField::Allergies => "Allergies",
            FormField::Medications => "Current Medications",
            FormField::HealthWorkerAccess => "Healthcare Worker Access",
            FormField::DataSharing => "Anonymous Data Sharing",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::AbhaNumber => "XX-XXXX-XXXX-XXXX",
            FormField::AadhaarNumber => "XXXX-XXXX-XXXX",
            FormField::Name => "Enter your full name",
            FormField::Age => "Age",
            FormField::Gender => "Select gender",
            FormField::BloodGroup => "Select blood group",
            FormField::Phone | FormField::EmergencyContact => "+91 XXXXX XXXXX",
            FormField::CurrentAddress => "Enter your current address",
            FormField::HomeState => "Select home state",
            FormField::Allergies => "List any known allergies",
            FormField::Medications => "List current medications and dosages",
            _ => "",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::Age => FieldKind::Digits,
            FormField::RegistrationType
            | FormField::Gender
            | FormField::BloodGroup
            | FormField::HomeState
            | FormField::InsuranceStatus => FieldKind::Choice,
            FormField::HealthWorkerAccess | FormField::DataSharing => FieldKind::Toggle,
            FormField::ChronicConditions => FieldKind::Checklist,
            _ => FieldKind::Text,
        }
    }

    /// Fields shown on a step. The ABHA fields only appear for ABHA registration.
    pub fn for_step(step: WizardStep, registration_type: RegistrationType) -> Vec<FormField> {
        match step {
            WizardStep::RegistrationType => match registration_type {
                RegistrationType::Abha => vec![
                    FormField::RegistrationType,
                    FormField::AbhaNumber,
                    FormField::AadhaarNumber,
                ],
                RegistrationType::Provisional => vec![FormField::RegistrationType],
            },
            WizardStep::PersonalInfo => vec![
                FormField::Name,
                FormField::Age,
                FormField::Gender,
                FormField::BloodGroup,
                FormField::Phone,
                FormField::EmergencyContact,
            ],
            WizardStep::Location => vec![
                FormField::CurrentAddress,
                FormField::HomeState,
                FormField::InsuranceStatus,
            ],
            WizardStep::HealthInfo => vec![
                FormField::ChronicConditions,
                FormField::Allergies,
                FormField::Medications,
            ],
            WizardStep::Privacy => vec![FormField::HealthWorkerAccess, FormField::DataSharing],
        }
    }
}

/// Value written through `RegistrationForm::update_field`
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Registration(RegistrationType),
    Insurance(InsuranceStatus),
    List(Vec<String>),
}

/// Everything the wizard collects, across all steps
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub registration_type: RegistrationType,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_group: String,
    pub phone: String,
    pub emergency_contact: String,
    pub current_address: String,
    pub home_state: String,
    pub current_state: String,
    pub allergies: String,
    pub chronic_conditions: Vec<String>,
    pub medications: String,
    pub insurance_status: InsuranceStatus,
    pub abha_number: String,
    pub aadhaar_number: String,
    pub data_sharing: bool,
    pub health_worker_access: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            registration_type: RegistrationType::default(),
            name: String::new(),
            age: String::new(),
            gender: String::new(),
            blood_group: String::new(),
            phone: String::new(),
            emergency_contact: String::new(),
            current_address: String::new(),
            home_state: String::new(),
            current_state: DEFAULT_CURRENT_STATE.to_string(),
            allergies: String::new(),
            chronic_conditions: Vec::new(),
            medications: String::new(),
            insurance_status: InsuranceStatus::default(),
            abha_number: String::new(),
            aadhaar_number: String::new(),
            data_sharing: false,
            health_worker_access: true,
        }
    }
}

impl RegistrationForm {
    /// Generic setter. Returns false, leaving the form untouched, when the
    /// value does not fit the field.
    pub fn update_field(&mut self, field: FormField, value: FieldValue) -> bool {
        match (field, value) {
            (FormField::RegistrationType, FieldValue::Registration(kind)) => self.registration_type = kind,
            (FormField::InsuranceStatus, FieldValue::Insurance(status)) => self.insurance_status = status,
            (FormField::ChronicConditions, FieldValue::List(list)) => self.chronic_conditions = list,
            (FormField::HealthWorkerAccess, FieldValue::Flag(flag)) => self.health_worker_access = flag,
            (FormField::DataSharing, FieldValue::Flag(flag)) => self.data_sharing = flag,
            (field, FieldValue::Text(text)) => match self.text_slot(field) {
                Some(slot) => *slot = text,
                None => {
                    warn!("Field {:?} does not take text", field);
                    return false;
                }
            },
            (field, value) => {
                warn!("Field {:?} cannot take {:?}", field, value);
                return false;
            }
        }
        true
    }

    fn text_slot(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::AbhaNumber => Some(&mut self.abha_number),
            FormField::AadhaarNumber => Some(&mut self.aadhaar_number),
            FormField::Name => Some(&mut self.name),
            FormField::Age => Some(&mut self.age),
            FormField::Gender => Some(&mut self.gender),
            FormField::BloodGroup => Some(&mut self.blood_group),
            FormField::Phone => Some(&mut self.phone),
            FormField::EmergencyContact => Some(&mut self.emergency_contact),
            FormField::CurrentAddress => Some(&mut self.current_address),
            FormField::HomeState => Some(&mut self.home_state),
            FormField::Allergies => Some(&mut self.allergies),
            FormField::Medications => Some(&mut self.medications),
            _ => None,
        }
    }

    /// Current value of a field as display text
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::RegistrationType => self.registration_type.label().to_string(),
            FormField::InsuranceStatus => self.insurance_status.label().to_string(),
            FormField::ChronicConditions => self.chronic_conditions.join(", "),
            FormField::HealthWorkerAccess => checkbox(self.health_worker_access).to_string(),
            FormField::DataSharing => checkbox(self.data_sharing).to_string(),
            FormField::AbhaNumber => self.abha_number.clone(),
            FormField::AadhaarNumber => self.aadhaar_number.clone(),
            FormField::Name => self.name.clone(),
            FormField::Age => self.age.clone(),
            FormField::Gender => self.gender.clone(),
            FormField::BloodGroup => self.blood_group.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::EmergencyContact => self.emergency_contact.clone(),
            FormField::CurrentAddress => self.current_address.clone(),
            FormField::HomeState => self.home_state.clone(),
            FormField::Allergies => self.allergies.clone(),
            FormField::Medications => self.medications.clone(),
        }
    }

    /// Add the condition if absent, remove it if present
    pub fn toggle_condition(&mut self, condition: &str) {
        let mut updated = self.chronic_conditions.clone();
        match updated.iter().position(|c| c == condition) {
            Some(index) => {
                updated.remove(index);
            }
            None => updated.push(condition.to_string()),
        }
        self.update_field(FormField::ChronicConditions, FieldValue::List(updated));
    }

    /// Build the final profile, assigning the health ID
    pub fn complete<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> UserData {
        let health_id = resolve_health_id(self.registration_type, &self.abha_number, now, rng);
        let abha = self.registration_type == RegistrationType::Abha;

        UserData {
            name: self.name.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
            blood_group: self.blood_group.clone(),
            phone: self.phone.clone(),
            emergency_contact: self.emergency_contact.clone(),
            current_address: self.current_address.clone(),
            home_state: self.home_state.clone(),
            current_state: self.current_state.clone(),
            allergies: self.allergies.clone(),
            chronic_conditions: self.chronic_conditions.clone(),
            medications: self.medications.clone(),
            insurance_status: self.insurance_status,
            abha_number: abha.then(|| self.abha_number.clone()),
            aadhaar_number: abha.then(|| self.aadhaar_number.clone()),
            data_sharing: self.data_sharing,
            health_worker_access: self.health_worker_access,
            health_id,
            registration_type: self.registration_type,
            registration_date: now,
        }
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Next or previous entry of `options`. An unset value starts at either end.
fn cycle(options: &[&str], current: &str, forward: bool) -> String {
    let len = options.len();
    let index = match (options.iter().position(|o| *o == current), forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    options[index].to_string()
}

pub struct RegistrationView {
    step: WizardStep,
    form: RegistrationForm,
    focus: usize,
    condition_cursor: usize,
    rng: StdRng,
}

impl Default for RegistrationView {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationView {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            step: WizardStep::RegistrationType,
            form: RegistrationForm::default(),
            focus: 0,
            condition_cursor: 0,
            rng,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    fn fields(&self) -> Vec<FormField> {
        FormField::for_step(self.step, self.form.registration_type)
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.fields().get(self.focus).copied()
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.fields().len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn go_to(&mut self, step: WizardStep) {
        info!("Registration step {} -> {}", self.step.number(), step.number());
        self.step = step;
        self.focus = 0;
    }

    fn advance(&mut self, now: DateTime<Utc>, outbox: &mut Outbox) {
        match self.step.next() {
            Some(step) => self.go_to(step),
            None => {
                let user = self.form.complete(now, &mut self.rng);
                info!(
                    "Registration complete: {:?} id {}",
                    user.registration_type, user.health_id
                );
                outbox.push(AppMessage::RegistrationComplete(Box::new(user)));
            }
        }
    }

    fn cycle_choice(&mut self, field: FormField, forward: bool) {
        let value = match field {
            FormField::RegistrationType => FieldValue::Registration(self.form.registration_type.toggle()),
            FormField::InsuranceStatus => {
                let all = InsuranceStatus::ALL;
                let i = all.iter().position(|s| *s == self.form.insurance_status).unwrap_or(0);
                let next = if forward { (i + 1) % all.len() } else { (i + all.len() - 1) % all.len() };
                FieldValue::Insurance(all[next])
            }
            FormField::Gender => FieldValue::Text(cycle(&GENDERS, &self.form.gender, forward)),
            FormField::BloodGroup => FieldValue::Text(cycle(&BLOOD_GROUPS, &self.form.blood_group, forward)),
            FormField::HomeState => FieldValue::Text(cycle(&INDIAN_STATES, &self.form.home_state, forward)),
            _ => return,
        };
        self.form.update_field(field, value);
        // ABHA fields appear or vanish with the registration type
        self.focus = self.focus.min(self.fields().len().saturating_sub(1));
    }

    fn edit_text(&mut self, field: FormField, key: KeyCode) -> bool {
        let mut text = self.form.display_value(field);
        match key {
            KeyCode::Char(c) if field.kind() == FieldKind::Digits => {
                if !c.is_ascii_digit() || text.len() >= 3 {
                    return true;
                }
                text.push(c);
            }
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => return false,
        }
        self.form.update_field(field, FieldValue::Text(text))
    }

    fn render_step_indicator(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for step in WizardStep::ALL {
            let (text, style) = if step < self.step {
                ("✓".to_string(), Style::default().fg(Color::Black).bg(Color::Green))
            } else if step == self.step {
                (
                    step.number().to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                (step.number().to_string(), Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(format!(" {} ", text), style));
            if step != WizardStep::Privacy {
                let connector = if step < self.step { Color::Green } else { Color::DarkGray };
                spans.push(Span::styled("──", Style::default().fg(connector)));
            }
        }
        Line::from(spans)
    }

    fn field_lines(&self, field: FormField, focused: bool) -> Vec<Line<'static>> {
        let value = self.form.display_value(field);
        match field.kind() {
            FieldKind::Text | FieldKind::Digits => {
                vec![input_line(field.label(), &value, field.placeholder(), focused)]
            }
            FieldKind::Choice => {
                let shown = if value.is_empty() { field.placeholder().to_string() } else { value };
                let mut lines = vec![input_line(field.label(), &format!("◀ {} ▶", shown), "", focused)];
                if field == FormField::RegistrationType {
                    for kind in [RegistrationType::Abha, RegistrationType::Provisional] {
                        let marker = if kind == self.form.registration_type { "(•)" } else { "( )" };
                        lines.push(Line::from(Span::styled(
                            format!("      {} {}: {}", marker, kind.label(), kind.description()),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                }
                lines
            }
            FieldKind::Toggle => {
                let description = match field {
                    FormField::HealthWorkerAccess => {
                        "Allow authorized healthcare workers to access your health information during consultations"
                    }
                    _ => "Share anonymized health data for public health research and disease surveillance",
                };
                vec![
                    input_line(field.label(), &value, "", focused),
                    Line::from(Span::styled(format!("      {}", description), Style::default().fg(Color::Gray))),
                ]
            }
            FieldKind::Checklist => {
                let mut lines = vec![input_line(field.label(), "", "", focused)];
                for (i, condition) in COMMON_CONDITIONS.iter().enumerate() {
                    let checked = self.form.chronic_conditions.iter().any(|c| c == condition);
                    let style = if focused && i == self.condition_cursor {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    lines.push(Line::from(Span::styled(
                        format!("      {} {}", checkbox(checked), condition),
                        style,
                    )));
                }
                lines
            }
        }
    }
}

impl View for RegistrationView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(vec![
            self.render_step_indicator(),
            Line::from(Span::styled(
                format!("Step {} of 5: {}", self.step.number(), self.step.title()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Health Registration"));
        f.render_widget(header, chunks[0]);

        let mut lines = Vec::new();
        for (i, field) in self.fields().into_iter().enumerate() {
            lines.extend(self.field_lines(field, i == self.focus));
            lines.push(Line::from(""));
        }

        match self.step {
            WizardStep::Location => {
                lines.push(field_line("  Current State", &self.form.current_state));
            }
            WizardStep::Privacy => {
                lines.push(Line::from(Span::styled(
                    "Your Privacy Rights:",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for right in [
                    "You control who can access your health information",
                    "Your immigration status is not tracked or documented",
                    "You can withdraw consent at any time",
                    "All data is encrypted and securely stored",
                ] {
                    lines.push(Line::from(Span::styled(format!("  • {}", right), Style::default().fg(Color::Gray))));
                }
            }
            _ => {}
        }

        let action = if self.step == WizardStep::Privacy { "Complete Registration" } else { "Continue" };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[Enter] {}   [Esc] Back", action),
            Style::default().fg(Color::Green),
        )));

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(self.step.title()));
        f.render_widget(body, chunks[1]);
    }

    fn get_title(&self) -> String {
        "Registration".to_string()
    }

    fn get_status(&self) -> String {
        format!("Step {} of 5: {}", self.step.number(), self.step.title())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑/↓", "field"),
            ("←/→", "choose"),
            ("Space", "toggle"),
            ("Enter", "next"),
            ("Esc", "back"),
        ]
    }

    fn is_editing(&self) -> bool {
        matches!(
            self.focused_field().map(FormField::kind),
            Some(FieldKind::Text | FieldKind::Digits)
        )
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Enter => {
                self.advance(ctx.now, outbox);
                return Ok(true);
            }
            KeyCode::Esc => {
                if let Some(step) = self.step.previous() {
                    self.go_to(step);
                }
                return Ok(true);
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.move_focus(false);
                return Ok(true);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.move_focus(true);
                return Ok(true);
            }
            _ => {}
        }

        let Some(field) = self.focused_field() else {
            return Ok(false);
        };

        let handled = match (field.kind(), key) {
            (FieldKind::Choice, KeyCode::Left) => {
                self.cycle_choice(field, false);
                true
            }
            (FieldKind::Choice, KeyCode::Right | KeyCode::Char(' ')) => {
                self.cycle_choice(field, true);
                true
            }
            (FieldKind::Toggle, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                let flag = match field {
                    FormField::HealthWorkerAccess => !self.form.health_worker_access,
                    _ => !self.form.data_sharing,
                };
                self.form.update_field(field, FieldValue::Flag(flag))
            }
            (FieldKind::Checklist, KeyCode::Left) => {
                self.condition_cursor = (self.condition_cursor + COMMON_CONDITIONS.len() - 1) % COMMON_CONDITIONS.len();
                true
            }
            (FieldKind::Checklist, KeyCode::Right) => {
                self.condition_cursor = (self.condition_cursor + 1) % COMMON_CONDITIONS.len();
                true
            }
            (FieldKind::Checklist, KeyCode::Char(' ')) => {
                self.form.toggle_condition(COMMON_CONDITIONS[self.condition_cursor]);
                true
            }
            (FieldKind::Text | FieldKind::Digits, key) => self.edit_text(field, key),
            _ => false,
        };
        Ok(handled)
    }
}
