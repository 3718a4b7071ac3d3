use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};
use tracing::debug;

use crate::mock_data::{self, SUPPORT_NUMBER};
use crate::models::{ServiceCategory, ServiceItem, ServiceStatus};
use crate::ui::components::{badge, render_card, render_title, selectable_line, status_tone};
use crate::ui::view::{AppMessage, Outbox, View, ViewContext};

/// Financial, employment and legal support services
pub struct ServicesHubView {
    quick_actions: Vec<ServiceItem>,
    categories: Vec<ServiceCategory>,
    selected: usize,
}

impl Default for ServicesHubView {
    fn default() -> Self {
        Self::new()
    }
}

impl ServicesHubView {
    pub fn new() -> Self {
        Self {
            quick_actions: mock_data::service_quick_actions(),
            categories: mock_data::service_categories(),
            selected: 0,
        }
    }

    /// Quick actions first, then every category item in order
    pub fn items(&self) -> impl Iterator<Item = &ServiceItem> {
        self.quick_actions
            .iter()
            .chain(self.categories.iter().flat_map(|c| c.items.iter()))
    }

    pub fn selected_item(&self) -> Option<&ServiceItem> {
        self.items().nth(self.selected)
    }

    fn item_line(&self, item: &ServiceItem, index: usize) -> Line<'static> {
        let mut line = selectable_line(format!("{}  ", item.name), index == self.selected);
        line.spans.push(badge(item.status.label(), status_tone(item.status.label())));
        if let Some(number) = item.phone_number() {
            line.spans.push(Span::styled(format!("  ☎ {}", number), Style::default().fg(Color::Cyan)));
        }
        line
    }
}

/// Message for activating a service link. Only `tel:` links do anything.
pub fn activate(item: &ServiceItem) -> Option<AppMessage> {
    match item.phone_number() {
        Some(number) => Some(AppMessage::Dial(number.to_string())),
        None => {
            debug!("Service '{}' has no action ({})", item.name, item.link);
            None
        }
    }
}

impl View for ServicesHubView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let category_count = self.categories.len().max(1) as u32;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(self.quick_actions.len() as u16 + 2),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(area);

        render_title(f, chunks[0], "Services Hub", "Your gateway to comprehensive support services");

        let quick = self
            .quick_actions
            .iter()
            .enumerate()
            .map(|(i, item)| self.item_line(item, i))
            .collect();
        render_card(f, chunks[1], "Quick Actions", quick);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, category_count); category_count as usize])
            .split(chunks[2]);
        let mut index = self.quick_actions.len();
        for (category, column) in self.categories.iter().zip(columns.iter()) {
            let lines = category
                .items
                .iter()
                .map(|item| {
                    let line = self.item_line(item, index);
                    index += 1;
                    line
                })
                .collect();
            render_card(f, *column, category.category, lines);
        }

        render_card(
            f,
            chunks[3],
            "Need Help?",
            vec![
                Line::from("Our support team is available 24/7 to assist you with any service-related queries"),
                Line::from(Span::styled(
                    format!("[h] Call Support {}", SUPPORT_NUMBER),
                    Style::default().fg(Color::Green),
                )),
            ],
        );
    }

    fn get_title(&self) -> String {
        "Services".to_string()
    }

    fn get_status(&self) -> String {
        let available = self.items().filter(|i| i.status == ServiceStatus::Available).count();
        format!("{} services available", available)
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("↑/↓", "select"), ("Enter", "open"), ("h", "call support")]
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.items().count().saturating_sub(1)),
            KeyCode::Enter => {
                if let Some(message) = self.selected_item().and_then(activate) {
                    outbox.push(message);
                }
            }
            KeyCode::Char('h') => outbox.push(AppMessage::Dial(SUPPORT_NUMBER.to_string())),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_only_tel_links_dial() {
        let view = ServicesHubView::new();
        let dialed: Vec<AppMessage> = view.items().filter_map(activate).collect();
        assert_eq!(
            dialed,
            vec![
                AppMessage::Dial("108".to_string()),
                AppMessage::Dial("1800-123-4567".to_string()),
            ]
        );
    }

    #[test]
    fn test_enter_on_emergency_helpline() {
        let ctx = ViewContext::new(None, "en", Utc::now());
        let mut view = ServicesHubView::new();
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert!(outbox.is_empty());

        view.handle_key(KeyCode::Down, &ctx, &mut outbox).unwrap();
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert_eq!(outbox.drain(), vec![AppMessage::Dial("108".to_string())]);
    }
}
