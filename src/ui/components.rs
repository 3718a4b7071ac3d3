/// Widgets and styling shared by the screens
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::models::Trend;

/// Color family for statuses and badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warning,
    Critical,
    Accent,
    Muted,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Good => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Critical => Color::Red,
            Tone::Accent => Color::Cyan,
            Tone::Muted => Color::DarkGray,
        }
    }
}

/// Map a status word from the fixtures onto a tone
pub fn status_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "normal" | "good" | "good health" | "completed" | "confirmed" | "resolved" | "active" | "available"
        | "recent" | "low" => Tone::Good,
        "warning" | "monitoring" | "medium" | "investigating" | "pending" => Tone::Warning,
        "critical" | "high" | "needs_attention" | "needs attention" => Tone::Critical,
        "coming soon" | "unavailable" => Tone::Muted,
        _ => Tone::Accent,
    }
}

pub fn badge(text: &str, tone: Tone) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::Black).bg(tone.color()),
    )
}

pub fn card_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
}

/// Screen title with a dim subtitle
pub fn render_title(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", subtitle), Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

/// Paragraph of lines inside a titled card, wrapped to the area
pub fn render_card(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .block(card_block(title))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

pub fn render_tabs(f: &mut Frame, area: Rect, titles: &[&str], selected: usize) {
    let tabs = Tabs::new(titles.iter().map(|t| t.to_string()).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .select(selected);

    f.render_widget(tabs, area);
}

/// Render a progress bar. Percent is clamped to 100.
pub fn render_progress_bar(f: &mut Frame, area: Rect, percent: u16, label: &str) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(label.to_string()))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent.min(100));

    f.render_widget(gauge, area);
}

/// Inline text bar such as `███████░░░ 70%`
pub fn progress_text(percent: u16, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    format!("{}{} {}%", "█".repeat(filled), "░".repeat(width - filled), percent)
}

pub fn trend_span(trend: Trend) -> Span<'static> {
    let color = match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Stable => Color::Gray,
    };
    Span::styled(trend.arrow().to_string(), Style::default().fg(color))
}

pub fn key_hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

/// One line of a selectable list
pub fn selectable_line(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("▶ {}", text),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("  {}", text))
    }
}

/// Labeled input showing a placeholder when empty and a cursor when focused
pub fn input_line(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_span = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };

    let mut spans = vec![
        Span::styled(format!("{}{}: ", if focused { "▶ " } else { "  " }, label), label_style),
        value_span,
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

pub fn render_empty(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Label/value pair on one line
pub fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone("normal"), Tone::Good);
        assert_eq!(status_tone("Monitoring"), Tone::Warning);
        assert_eq!(status_tone("needs_attention"), Tone::Critical);
        assert_eq!(status_tone("Coming Soon"), Tone::Muted);
        assert_eq!(status_tone("something else"), Tone::Accent);
    }

    #[test]
    fn test_progress_text() {
        assert_eq!(progress_text(70, 10), "███████░░░ 70%");
        assert_eq!(progress_text(250, 4), "████ 100%");
        assert_eq!(progress_text(0, 3), "░░░ 0%");
    }

    #[test]
    fn test_key_hint_line() {
        let line = key_hint_line(&[("Tab", "next"), ("q", "quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Tab next • q quit");
    }

    #[test]
    fn test_badge_padding() {
        assert_eq!(badge("ABHA Verified", Tone::Good).content, " ABHA Verified ");
    }

    #[test]
    fn test_progress_bar_over_hundred_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|f| render_progress_bar(f, f.area(), 180, "Level"))
            .unwrap();
    }
}
