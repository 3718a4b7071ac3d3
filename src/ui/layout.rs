use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::components::key_hint_line;
use crate::ui::state::Notification;

/// Width of the navigation sidebar
pub const SIDEBAR_WIDTH: u16 = 26;

/// Centralized layout management for the main app
pub struct TuiLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl TuiLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Sidebar + content
                Constraint::Length(4), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        Self {
            header: rows[0],
            sidebar: columns[0],
            content: columns[1],
            status_bar: rows[2],
        }
    }

    /// Layout for welcome and registration, which have no sidebar
    pub fn onboarding(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(area);

        Self {
            header: rows[0],
            sidebar: Rect::default(),
            content: rows[1],
            status_bar: rows[2],
        }
    }

    pub fn render_header(&self, f: &mut Frame, language: &str) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Arogya Sarthi",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Health Companion", Style::default().fg(Color::Gray)),
            Span::styled(format!("   [{}]", language), Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL));

        f.render_widget(header, self.header);
    }

    /// Key hints on the first line, then the active notification or view status
    pub fn render_status_bar(
        &self,
        f: &mut Frame,
        hints: &[(&str, &str)],
        notification: Option<&Notification>,
        status_text: &str,
    ) {
        let second = match notification {
            Some(n) => Line::from(vec![
                Span::styled(
                    format!("{} {}", n.toast.level.icon(), n.toast.title),
                    Style::default().fg(n.toast.level.color()).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(n.toast.message.clone(), Style::default().fg(Color::White)),
            ]),
            None => Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Gray)),
                Span::styled(status_text.to_string(), Style::default().fg(Color::White)),
            ]),
        };

        let paragraph = Paragraph::new(vec![key_hint_line(hints), second])
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, self.status_bar);
    }
}

/// Helper struct for screen-specific layouts
pub struct ViewLayout {
    pub title: Rect,
    pub tabs: Option<Rect>,
    pub main_content: Rect,
}

impl ViewLayout {
    pub fn new(content_area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Main content
            ])
            .split(content_area);

        Self {
            title: chunks[0],
            tabs: None,
            main_content: chunks[1],
        }
    }

    /// Title, a tab strip, then content
    pub fn with_tabs(content_area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(content_area);

        Self {
            title: chunks[0],
            tabs: Some(chunks[1]),
            main_content: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_regions() {
        let layout = TuiLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 4);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(layout.content.height, 40 - 3 - 4);
    }

    #[test]
    fn test_onboarding_has_no_sidebar() {
        let layout = TuiLayout::onboarding(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.sidebar.area(), 0);
        assert_eq!(layout.content.width, 80);
    }

    #[test]
    fn test_view_layout_with_tabs() {
        let layout = ViewLayout::with_tabs(Rect::new(0, 0, 60, 30));
        assert_eq!(layout.tabs.map(|t| t.height), Some(3));
        assert_eq!(layout.main_content.height, 24);
    }
}
