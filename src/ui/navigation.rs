use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::UserData;
use crate::ui::router::{Route, ViewId};

/// Sidebar with the signed-in user and every screen, current one highlighted
pub fn render_sidebar(f: &mut Frame, area: Rect, route: &Route, user: Option<&UserData>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let (name, health_id) = match user {
        Some(user) => (user.name.as_str(), user.health_id.as_str()),
        None => ("Guest", "Not registered"),
    };
    let profile = Paragraph::new(vec![
        Line::from(Span::styled(
            name.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(health_id.to_string(), Style::default().fg(Color::Gray))),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(profile, chunks[0]);

    let current = route.view();
    let items: Vec<ListItem> = ViewId::ALL
        .iter()
        .map(|view| {
            let selected = current == Some(*view);
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else if *view == ViewId::Emergency {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", view.label()), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Navigate"));
    f.render_widget(list, chunks[1]);
}
