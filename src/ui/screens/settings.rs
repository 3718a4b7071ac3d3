use ratatui::{layout::Rect, Frame};

use crate::ui::components::{render_empty, render_title};
use crate::ui::layout::ViewLayout;
use crate::ui::view::{View, ViewContext};

pub struct SettingsView;

impl Default for SettingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsView {
    pub fn new() -> Self {
        Self
    }
}

impl View for SettingsView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let layout = ViewLayout::new(area);
        render_title(f, layout.title, "Settings", "");
        render_empty(f, layout.main_content, "App settings coming soon...");
    }

    fn get_title(&self) -> String {
        "Settings".to_string()
    }

    fn get_status(&self) -> String {
        String::new()
    }
}
