use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tracing::{debug, info};

use crate::mock_data::{self, DEFAULT_VOICE_LANGUAGE, SIMULATED_TRANSCRIPT};
use crate::models::{ConversationTurn, Speaker, VoiceCommand, VoiceLanguage};
use crate::ui::components::{badge, render_card, render_tabs, render_title, selectable_line, Tone};
use crate::ui::events::TimerKind;
use crate::ui::state::Toast;
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};

/// Time the fake recognizer "listens" before producing a transcript
pub const TRANSCRIPTION_DELAY: Duration = Duration::from_secs(3);

/// Time the assistant spends "speaking" its reply
pub const RESPONSE_DELAY: Duration = Duration::from_secs(2);

const TABS: [&str; 3] = ["Voice Commands", "Conversation", "Help & Tips"];

const BP_PROMPT: &str = "कृपया अपना ब्लड प्रेशर बताएं। पहले सिस्टोलिक फिर डायस्टोलिक।";
const CARD_PROMPT: &str = "आपका स्वास्थ्य कार्ड तैयार है। स्क्रीन पर देखें।";
const DEFAULT_PROMPT: &str = "मैं आपकी मदद करने के लिए यहाँ हूँ। कुछ और पूछें।";

/// Canned assistant reply for a transcript
pub fn reply_for(command: &str) -> &'static str {
    if command.contains("ब्लड प्रेशर") {
        BP_PROMPT
    } else if command.contains("स्वास्थ्य कार्ड") {
        CARD_PROMPT
    } else {
        DEFAULT_PROMPT
    }
}

/// Simulated voice assistant
pub struct VoiceView {
    languages: Vec<VoiceLanguage>,
    commands: Vec<VoiceCommand>,
    history: Vec<ConversationTurn>,
    language: usize,
    listening: bool,
    speaking: bool,
    voice_enabled: bool,
    transcript: String,
    response: String,
    tab: usize,
}

impl Default for VoiceView {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceView {
    pub fn new() -> Self {
        let languages = mock_data::voice_languages();
        let language = languages
            .iter()
            .position(|l| l.code == DEFAULT_VOICE_LANGUAGE)
            .unwrap_or(0);
        Self {
            languages,
            commands: mock_data::voice_commands(),
            history: mock_data::conversation_history(),
            language,
            listening: false,
            speaking: false,
            voice_enabled: true,
            transcript: String::new(),
            response: String::new(),
            tab: 0,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn language(&self) -> Option<&VoiceLanguage> {
        self.languages.get(self.language)
    }

    fn toggle_listening(&mut self, outbox: &mut Outbox) {
        if self.listening {
            self.listening = false;
            self.speaking = false;
            outbox.push(AppMessage::CancelTimers);
            debug!("Stopped listening");
            return;
        }

        self.listening = true;
        self.transcript.clear();
        outbox.push(AppMessage::Schedule {
            kind: TimerKind::VoiceTranscription,
            after: TRANSCRIPTION_DELAY,
        });
        outbox.notify(Toast::info("सुन रहा हूँ...", "अपनी आवाज़ में बोलें"));
        info!(
            "Listening in {}",
            self.language().map(|l| l.code).unwrap_or(DEFAULT_VOICE_LANGUAGE)
        );
    }

    fn answer(&mut self, command: &str, outbox: &mut Outbox) {
        self.speaking = true;
        self.response = reply_for(command).to_string();
        outbox.push(AppMessage::Schedule {
            kind: TimerKind::VoiceResponse,
            after: RESPONSE_DELAY,
        });
    }

    fn toggle_voice(&mut self, outbox: &mut Outbox) {
        let toast = if self.voice_enabled {
            Toast::info("आवाज़ बंद", "Voice responses disabled")
        } else {
            Toast::info("आवाज़ चालू", "Voice responses enabled")
        };
        self.voice_enabled = !self.voice_enabled;
        outbox.notify(toast);
    }

    fn render_controls(&self, f: &mut Frame, area: Rect) {
        let state = if self.listening {
            badge("Listening...", Tone::Critical)
        } else if self.speaking {
            badge("Speaking...", Tone::Accent)
        } else {
            badge("Ready to listen", Tone::Muted)
        };
        let mic = if self.listening { "[■] Stop" } else { "[●] Speak" };
        let voice = if self.voice_enabled { "🔊 Voice On" } else { "🔇 Voice Off" };
        let language = self
            .language()
            .map(|l| format!("{} ({})", l.name, l.voice))
            .unwrap_or_default();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{}  ", mic), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                state,
            ]),
            Line::from(vec![
                Span::styled("Current Language: ", Style::default().fg(Color::Gray)),
                Span::raw(language),
            ]),
            Line::from(Span::raw(voice)),
        ];
        if !self.transcript.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("You said: ", Style::default().fg(Color::Gray)),
                Span::raw(self.transcript.clone()),
            ]));
        }
        if !self.response.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Assistant: ", Style::default().fg(Color::Gray)),
                Span::styled(self.response.clone(), Style::default().fg(Color::Green)),
            ]));
        }
        render_card(f, area, "Voice Controls", lines);
    }

    fn render_commands(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Try saying these commands in your preferred language",
            Style::default().fg(Color::Gray),
        ))];
        for cmd in &self.commands {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", cmd.command), Style::default().add_modifier(Modifier::BOLD)),
                badge(cmd.category, Tone::Accent),
            ]));
            lines.push(Line::from(Span::styled(format!("  {}", cmd.english), Style::default().fg(Color::Gray))));
        }
        render_card(f, area, "Available Voice Commands", lines);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let lines = self
            .history
            .iter()
            .flat_map(|turn| {
                let (who, color) = match turn.speaker {
                    Speaker::User => ("You", Color::Cyan),
                    Speaker::Assistant => ("Assistant", Color::Green),
                };
                [
                    Line::from(vec![
                        Span::styled(format!("{}: ", who), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                        Span::raw(turn.text),
                    ]),
                    Line::from(Span::styled(
                        format!("  {} • {}", turn.translation, turn.time),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, area, "Recent Conversation", lines);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let steps = [
            ("1. Select Your Language", "Choose your preferred language from the list"),
            ("2. Tap to Speak", "Press Space and speak clearly"),
            ("3. Listen to Response", "The assistant will respond in your selected language"),
        ];
        let mut lines: Vec<Line<'static>> = steps
            .iter()
            .flat_map(|(title, detail)| {
                [
                    Line::from(Span::styled(*title, Style::default().add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled(format!("  {}", detail), Style::default().fg(Color::Gray))),
                ]
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Speaking Tips", Style::default().add_modifier(Modifier::BOLD))));
        for tip in [
            "Speak clearly and slowly",
            "Use simple, direct phrases",
            "Avoid background noise",
            "Hold phone close to mouth",
        ] {
            lines.push(Line::from(format!("  • {}", tip)));
        }
        render_card(f, columns[0], "How to Use", lines);

        let lines = self
            .languages
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let mut line = selectable_line(format!("{}  ", l.name), i == self.language);
                line.spans.push(badge(l.voice, Tone::Muted));
                line
            })
            .collect();
        render_card(f, columns[1], "Language Support", lines);
    }
}

impl View for VoiceView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(f, chunks[0], "Voice Assistant", "Speak in your language for health assistance");
        self.render_controls(f, chunks[1]);
        render_tabs(f, chunks[2], &TABS, self.tab);

        match self.tab {
            0 => self.render_commands(f, chunks[3]),
            1 => self.render_history(f, chunks[3]),
            _ => self.render_help(f, chunks[3]),
        }
    }

    fn get_title(&self) -> String {
        "Voice".to_string()
    }

    fn get_status(&self) -> String {
        let state = if self.listening {
            "listening"
        } else if self.speaking {
            "speaking"
        } else {
            "ready"
        };
        format!(
            "Voice assistant {} • {}",
            state,
            self.language().map(|l| l.voice).unwrap_or("-")
        )
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Space", "speak"), ("v", "voice on/off"), ("↑/↓", "language"), ("←/→", "tabs")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_listening(outbox),
            KeyCode::Char('v') => self.toggle_voice(outbox),
            KeyCode::Up => self.language = self.language.saturating_sub(1),
            KeyCode::Down => self.language = (self.language + 1).min(self.languages.len().saturating_sub(1)),
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_timer(&mut self, kind: TimerKind, outbox: &mut Outbox) -> Result<bool> {
        match kind {
            TimerKind::VoiceTranscription => {
                if !self.listening {
                    return Ok(false);
                }
                self.listening = false;
                self.transcript = SIMULATED_TRANSCRIPT.to_string();
                self.answer(SIMULATED_TRANSCRIPT, outbox);
            }
            TimerKind::VoiceResponse => {
                if !self.speaking {
                    return Ok(false);
                }
                self.speaking = false;
                outbox.notify(Toast::info("प्रतिक्रिया", self.response.clone()));
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ctx() -> ViewContext<'static> {
        ViewContext::new(None, "hi", chrono::Utc::now())
    }

    #[test]
    fn test_reply_for_keywords() {
        assert_eq!(reply_for("मेरा ब्लड प्रेशर रिकॉर्ड करें"), BP_PROMPT);
        assert_eq!(reply_for("मेरा स्वास्थ्य कार्ड दिखाएं"), CARD_PROMPT);
        assert_eq!(reply_for("hello"), DEFAULT_PROMPT);
    }

    #[test]
    fn test_default_language_is_hindi() {
        let view = VoiceView::new();
        assert_eq!(view.language().map(|l| l.voice), Some("Aditi"));
    }

    #[test]
    fn test_listen_schedules_transcription() {
        let mut view = VoiceView::new();
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Char(' '), &ctx(), &mut outbox).unwrap();
        assert!(view.is_listening());
        assert_matches!(
            outbox.drain().as_slice(),
            [
                AppMessage::Schedule { kind: TimerKind::VoiceTranscription, after },
                AppMessage::Notify(_)
            ] if *after == TRANSCRIPTION_DELAY
        );

        view.handle_key(KeyCode::Char(' '), &ctx(), &mut outbox).unwrap();
        assert!(!view.is_listening());
        assert_eq!(outbox.drain(), vec![AppMessage::CancelTimers]);
    }

    #[test]
    fn test_full_voice_exchange() {
        let mut view = VoiceView::new();
        let mut outbox = Outbox::new();
        view.handle_key(KeyCode::Enter, &ctx(), &mut outbox).unwrap();
        outbox.drain();

        assert!(view.handle_timer(TimerKind::VoiceTranscription, &mut outbox).unwrap());
        assert_eq!(view.transcript(), SIMULATED_TRANSCRIPT);
        assert_eq!(view.response(), BP_PROMPT);
        assert!(view.is_speaking());
        assert_matches!(
            outbox.drain().as_slice(),
            [AppMessage::Schedule { kind: TimerKind::VoiceResponse, .. }]
        );

        assert!(view.handle_timer(TimerKind::VoiceResponse, &mut outbox).unwrap());
        assert!(!view.is_speaking());
        assert_matches!(
            outbox.drain().as_slice(),
            [AppMessage::Notify(t)] if t.message == BP_PROMPT
        );
    }

    #[test]
    fn test_timer_without_listening_is_ignored() {
        let mut view = VoiceView::new();
        let mut outbox = Outbox::new();
        assert!(!view.handle_timer(TimerKind::VoiceTranscription, &mut outbox).unwrap());
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_toggle_voice() {
        let mut view = VoiceView::new();
        let mut outbox = Outbox::new();
        view.handle_key(KeyCode::Char('v'), &ctx(), &mut outbox).unwrap();
        assert!(!view.voice_enabled());
        assert_matches!(
            outbox.drain().as_slice(),
            [AppMessage::Notify(t)] if t.message == "Voice responses disabled"
        );
    }
}
