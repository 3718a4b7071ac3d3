use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::mock_data;
use crate::models::{Feature, Language};
use crate::ui::components::render_card;
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};

/// Language picker and feature overview shown before registration
pub struct WelcomeView {
    languages: Vec<Language>,
    features: Vec<Feature>,
    selected: usize,
}

impl WelcomeView {
    pub fn new(initial_language: &str) -> Self {
        let languages = mock_data::languages();
        let selected = languages
            .iter()
            .position(|l| l.code == initial_language)
            .unwrap_or(0);
        Self {
            languages,
            features: mock_data::welcome_features(),
            selected,
        }
    }

    pub fn selected_language(&self) -> &str {
        self.languages.get(self.selected).map(|l| l.code).unwrap_or("en")
    }

    fn select(&mut self, index: usize, outbox: &mut Outbox) {
        self.selected = index;
        outbox.push(AppMessage::LanguageSelected(self.selected_language().to_string()));
    }
}

impl View for WelcomeView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                "Arogya Sarthi",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from("आरोग्य सारथी • Health Companion"),
            Line::from(Span::styled(
                "Your trusted digital health companion for secure medical records and healthcare access",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(hero, chunks[0]);

        let mut spans = Vec::new();
        for (i, language) in self.languages.iter().enumerate() {
            let style = if i == self.selected {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} {} ", language.name, language.native_name), style));
            spans.push(Span::raw(" "));
        }
        let picker = Paragraph::new(vec![
            Line::from(Span::styled(
                "अपनी भाषा चुनें • Select your preferred language",
                Style::default().fg(Color::Gray),
            )),
            Line::from(spans),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Choose Your Language"));
        f.render_widget(picker, chunks[1]);

        let feature_lines = self
            .features
            .iter()
            .flat_map(|feature| {
                [
                    Line::from(Span::styled(
                        feature.title,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("  {}", feature.description)),
                ]
            })
            .collect();
        render_card(f, chunks[2], "Features", feature_lines);

        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                "Press Enter to Get Started",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "By continuing, you agree to our privacy policy and terms of service",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[3]);
    }

    fn get_title(&self) -> String {
        "Welcome".to_string()
    }

    fn get_status(&self) -> String {
        format!("Language: {}", self.selected_language())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("←/→", "language"), ("Enter", "get started"), ("q", "quit")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        let count = self.languages.len();
        match key {
            KeyCode::Left | KeyCode::Up => {
                self.select((self.selected + count - 1) % count, outbox);
                Ok(true)
            }
            KeyCode::Right | KeyCode::Down => {
                self.select((self.selected + 1) % count, outbox);
                Ok(true)
            }
            KeyCode::Enter => {
                outbox.push(AppMessage::ContinueToRegistration);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_selecting_language_emits_message() {
        let mut view = WelcomeView::new("en");
        let ctx = ViewContext::new(None, "en", Utc::now());
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Right, &ctx, &mut outbox).unwrap();
        assert_eq!(view.selected_language(), "hi");
        assert_eq!(outbox.drain(), vec![AppMessage::LanguageSelected("hi".to_string())]);

        view.handle_key(KeyCode::Left, &ctx, &mut outbox).unwrap();
        view.handle_key(KeyCode::Left, &ctx, &mut outbox).unwrap();
        assert_eq!(view.selected_language(), "ml");
    }

    #[test]
    fn test_enter_continues() {
        let mut view = WelcomeView::new("ta");
        assert_eq!(view.selected_language(), "ta");

        let ctx = ViewContext::new(None, "ta", Utc::now());
        let mut outbox = Outbox::new();
        assert!(view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap());
        assert_eq!(outbox.drain(), vec![AppMessage::ContinueToRegistration]);
    }
}
