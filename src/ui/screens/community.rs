use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tracing::{debug, info};

use crate::mock_data::{self, DEFAULT_CURRENT_STATE};
use crate::models::{CommunityPost, CommunityStat, SupportResource, POST_CATEGORIES};
use crate::ui::components::{badge, input_line, render_card, render_tabs, render_title, selectable_line, Tone};
use crate::ui::state::Toast;
use crate::ui::view::{Outbox, View, ViewContext};

/// Forum posts, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunityFeed {
    posts: Vec<CommunityPost>,
}

impl CommunityFeed {
    pub fn new(posts: Vec<CommunityPost>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Prepend a post by "You". Blank content is ignored and returns `None`.
    pub fn submit_post(&mut self, content: &str, category: &str) -> Option<u32> {
        if content.trim().is_empty() {
            return None;
        }

        let id = self.posts.len() as u32 + 1;
        self.posts.insert(
            0,
            CommunityPost {
                id,
                author: "You".to_string(),
                state: DEFAULT_CURRENT_STATE.to_string(),
                content: content.to_string(),
                category: category.to_string(),
                likes: 0,
                replies: 0,
                time_ago: "Just now".to_string(),
                is_helpful: false,
            },
        );
        Some(id)
    }

    /// Add one like to the post with `id`. Returns false if there is none.
    pub fn like(&mut self, id: u32) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.likes = post.likes.saturating_add(1);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityTab {
    Forum,
    PeerSupport,
    Resources,
}

impl CommunityTab {
    const ALL: [CommunityTab; 3] = [CommunityTab::Forum, CommunityTab::PeerSupport, CommunityTab::Resources];

    fn title(self) -> &'static str {
        match self {
            CommunityTab::Forum => "Community Forum",
            CommunityTab::PeerSupport => "Peer Support",
            CommunityTab::Resources => "Shared Resources",
        }
    }
}

/// Forum with a composer, peer support and shared resources
pub struct CommunityView {
    feed: CommunityFeed,
    stats: Vec<CommunityStat>,
    peer_support: Vec<SupportResource>,
    resources: Vec<SupportResource>,
    tab: usize,
    selected: usize,
    composing: bool,
    draft: String,
    category: usize,
}

impl Default for CommunityView {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityView {
    pub fn new() -> Self {
        Self {
            feed: CommunityFeed::new(mock_data::community_posts()),
            stats: mock_data::community_stats(),
            peer_support: mock_data::peer_support(),
            resources: mock_data::shared_resources(),
            tab: 0,
            selected: 0,
            composing: false,
            draft: String::new(),
            category: 0,
        }
    }

    pub fn feed(&self) -> &CommunityFeed {
        &self.feed
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn category(&self) -> &'static str {
        POST_CATEGORIES[self.category]
    }

    fn submit(&mut self, outbox: &mut Outbox) {
        let category = self.category();
        match self.feed.submit_post(&self.draft, category) {
            Some(id) => {
                info!("Post {} shared in {}", id, category);
                self.draft.clear();
                self.composing = false;
                self.selected = 0;
                outbox.notify(Toast::success(
                    "Post Shared",
                    "Your post has been shared with the community",
                ));
            }
            None => debug!("Ignoring empty post"),
        }
    }

    fn render_forum(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let composer = vec![
            input_line(
                "Post",
                &self.draft,
                "Share your thoughts, ask questions, or offer help...",
                self.composing,
            ),
            Line::from(vec![
                Span::styled("  Category: ", Style::default().fg(Color::Gray)),
                Span::styled(self.category(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    if self.composing { "   [Tab] change  [Enter] post  [Esc] cancel" } else { "   [n] write a post" },
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        render_card(f, chunks[0], "Share with Community", composer);

        let lines = self
            .feed
            .posts()
            .iter()
            .enumerate()
            .flat_map(|(i, post)| {
                let mut header = selectable_line(format!("{} • {}  ", post.author, post.state), i == self.selected);
                header.spans.push(badge(&post.category, Tone::Accent));
                if post.is_helpful {
                    header.spans.push(Span::raw(" "));
                    header.spans.push(badge("Helpful", Tone::Good));
                }
                [
                    header,
                    Line::from(format!("    {}", post.content)),
                    Line::from(Span::styled(
                        format!("    ♥ {}   💬 {}   {}", post.likes, post.replies, post.time_ago),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect();
        render_card(f, chunks[1], "Recent Posts", lines);
    }

    fn resource_lines(resources: &[SupportResource]) -> Vec<Line<'static>> {
        resources
            .iter()
            .flat_map(|r| {
                [
                    Line::from(Span::styled(r.title, Style::default().add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled(format!("  {}", r.subtitle), Style::default().fg(Color::Gray))),
                ]
            })
            .collect()
    }
}

impl View for CommunityView {
    fn render(&self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_title(f, chunks[0], "Community Support", "Connect, share, and support fellow migrant workers");

        let stats: Vec<Span> = self
            .stats
            .iter()
            .flat_map(|s| {
                [
                    Span::styled(s.value, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" {}    ", s.label), Style::default().fg(Color::Gray)),
                ]
            })
            .collect();
        render_card(f, chunks[1], "Community", vec![Line::from(stats)]);

        let titles: Vec<&str> = CommunityTab::ALL.iter().map(|t| t.title()).collect();
        render_tabs(f, chunks[2], &titles, self.tab);

        match CommunityTab::ALL[self.tab] {
            CommunityTab::Forum => self.render_forum(f, chunks[3]),
            CommunityTab::PeerSupport => {
                let mut lines = Self::resource_lines(&self.peer_support);
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "[Join Support Group]  [Find a Mentor]",
                    Style::default().fg(Color::Green),
                )));
                render_card(f, chunks[3], "Mental Health Support & Peer Mentorship", lines);
            }
            CommunityTab::Resources => {
                render_card(f, chunks[3], "Shared Knowledge Base", Self::resource_lines(&self.resources));
            }
        }
    }

    fn get_title(&self) -> String {
        "Community".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} posts", self.feed.len())
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.composing {
            vec![("Tab", "category"), ("Enter", "post"), ("Esc", "cancel")]
        } else {
            vec![("←/→", "tabs"), ("n", "new post"), ("↑/↓", "select"), ("l", "like")]
        }
    }

    fn is_editing(&self) -> bool {
        self.composing
    }

    fn handle_key(&mut self, key: KeyCode, _ctx: &ViewContext, outbox: &mut Outbox) -> Result<bool> {
        if self.composing {
            match key {
                KeyCode::Esc => self.composing = false,
                KeyCode::Enter => self.submit(outbox),
                KeyCode::Tab => self.category = (self.category + 1) % POST_CATEGORIES.len(),
                KeyCode::BackTab => {
                    self.category = (self.category + POST_CATEGORIES.len() - 1) % POST_CATEGORIES.len()
                }
                KeyCode::Char(c) => self.draft.push(c),
                KeyCode::Backspace => {
                    self.draft.pop();
                }
                _ => return Ok(false),
            }
            return Ok(true);
        }

        let tabs = CommunityTab::ALL.len();
        let on_forum = CommunityTab::ALL[self.tab] == CommunityTab::Forum;
        match key {
            KeyCode::Left => self.tab = (self.tab + tabs - 1) % tabs,
            KeyCode::Right => self.tab = (self.tab + 1) % tabs,
            KeyCode::Char('n') if on_forum => self.composing = true,
            KeyCode::Up if on_forum => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down if on_forum => self.selected = (self.selected + 1).min(self.feed.len().saturating_sub(1)),
            KeyCode::Char('l') if on_forum => {
                let Some(id) = self.feed.posts().get(self.selected).map(|p| p.id) else {
                    return Ok(false);
                };
                self.feed.like(id);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::AppMessage;
    use chrono::Utc;

    #[test]
    fn test_blank_post_is_ignored() {
        let mut feed = CommunityFeed::new(mock_data::community_posts());
        assert_eq!(feed.submit_post("", "Healthcare"), None);
        assert_eq!(feed.submit_post("   \n\t", "Healthcare"), None);
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn test_new_post_is_prepended() {
        let mut feed = CommunityFeed::new(mock_data::community_posts());
        assert_eq!(feed.submit_post("Free camp on Sunday", "Health News"), Some(4));

        let first = &feed.posts()[0];
        assert_eq!(feed.len(), 4);
        assert_eq!(first.author, "You");
        assert_eq!(first.state, "Kerala");
        assert_eq!(first.time_ago, "Just now");
        assert_eq!(first.likes, 0);
    }

    #[test]
    fn test_like_touches_only_target() {
        let mut feed = CommunityFeed::new(mock_data::community_posts());
        assert!(feed.like(2));
        let likes: Vec<u32> = feed.posts().iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![12, 26, 7]);
        assert!(!feed.like(99));
    }

    #[test]
    fn test_like_count_saturates() {
        let mut posts = mock_data::community_posts();
        posts[0].likes = u32::MAX;
        let id = posts[0].id;
        let mut feed = CommunityFeed::new(posts);

        assert!(feed.like(id));
        assert_eq!(feed.posts()[0].likes, u32::MAX);
    }

    #[test]
    fn test_compose_and_submit() {
        let ctx = ViewContext::new(None, "en", Utc::now());
        let mut view = CommunityView::new();
        let mut outbox = Outbox::new();

        view.handle_key(KeyCode::Char('n'), &ctx, &mut outbox).unwrap();
        assert!(view.is_editing());
        view.handle_key(KeyCode::Tab, &ctx, &mut outbox).unwrap();
        assert_eq!(view.category(), "Insurance");

        // empty submit keeps the composer open
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();
        assert!(view.is_editing());
        assert!(outbox.is_empty());

        for c in "hello".chars() {
            view.handle_key(KeyCode::Char(c), &ctx, &mut outbox).unwrap();
        }
        view.handle_key(KeyCode::Enter, &ctx, &mut outbox).unwrap();

        assert_eq!(view.feed().posts()[0].content, "hello");
        assert_eq!(view.feed().posts()[0].category, "Insurance");
        assert_eq!(view.draft(), "");
        assert_eq!(
            outbox.drain(),
            vec![AppMessage::Notify(Toast::success(
                "Post Shared",
                "Your post has been shared with the community"
            ))]
        );
    }
}
