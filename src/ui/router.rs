use tracing::{debug, warn};

/// Every screen reachable from the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Dashboard,
    HealthCard,
    Records,
    Tracking,
    Family,
    Emergency,
    Services,
    AiGuidance,
    Rewards,
    Community,
    Telemedicine,
    Analytics,
    Reporting,
    Voice,
    Settings,
}

impl ViewId {
    /// Navigation order
    pub const ALL: [ViewId; 15] = [
        ViewId::Dashboard,
        ViewId::HealthCard,
        ViewId::Records,
        ViewId::Tracking,
        ViewId::Family,
        ViewId::Emergency,
        ViewId::Services,
        ViewId::AiGuidance,
        ViewId::Rewards,
        ViewId::Community,
        ViewId::Telemedicine,
        ViewId::Analytics,
        ViewId::Reporting,
        ViewId::Voice,
        ViewId::Settings,
    ];

    pub fn token(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::HealthCard => "health-card",
            ViewId::Records => "records",
            ViewId::Tracking => "tracking",
            ViewId::Family => "family",
            ViewId::Emergency => "emergency",
            ViewId::Services => "services",
            ViewId::AiGuidance => "ai-guidance",
            ViewId::Rewards => "rewards",
            ViewId::Community => "community",
            ViewId::Telemedicine => "telemedicine",
            ViewId::Analytics => "analytics",
            ViewId::Reporting => "reporting",
            ViewId::Voice => "voice",
            ViewId::Settings => "settings",
        }
    }

    pub fn from_token(token: &str) -> Option<ViewId> {
        Self::ALL.into_iter().find(|view| view.token() == token)
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::HealthCard => "Health Card",
            ViewId::Records => "Records",
            ViewId::Tracking => "Health Track",
            ViewId::Family => "Family",
            ViewId::Emergency => "Emergency",
            ViewId::Services => "Services",
            ViewId::AiGuidance => "AI Guidance",
            ViewId::Rewards => "Rewards",
            ViewId::Community => "Community",
            ViewId::Telemedicine => "Telemedicine",
            ViewId::Analytics => "Analytics",
            ViewId::Reporting => "Report Issue",
            ViewId::Voice => "Voice Assistant",
            ViewId::Settings => "Settings",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> ViewId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> ViewId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What the content area is showing. Unknown tokens are kept as-is and
/// render nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Known(ViewId),
    Unrecognized(String),
}

impl Route {
    pub fn from_token(token: &str) -> Self {
        match ViewId::from_token(token) {
            Some(view) => Route::Known(view),
            None => Route::Unrecognized(token.to_string()),
        }
    }

    pub fn view(&self) -> Option<ViewId> {
        match self {
            Route::Known(view) => Some(*view),
            Route::Unrecognized(_) => None,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Route::Known(view) => view.token(),
            Route::Unrecognized(token) => token,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Known(ViewId::Dashboard)
    }
}

/// Holds the current route. Any route can follow any other.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: Route,
}

impl ViewRouter {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn on_view_change(&mut self, token: &str) -> &Route {
        let route = Route::from_token(token);
        if let Route::Unrecognized(token) = &route {
            warn!("Unrecognized view token '{}', content will be blank", token);
        } else {
            debug!("View change: {} -> {}", self.current.token(), token);
        }
        self.current = route;
        &self.current
    }

    pub fn navigate(&mut self, view: ViewId) {
        debug!("View change: {} -> {}", self.current.token(), view.token());
        self.current = Route::Known(view);
    }

    /// Next item in navigation order. From an unknown route this is the first item.
    pub fn next(&mut self) -> ViewId {
        let view = match self.current.view() {
            Some(view) => view.next(),
            None => ViewId::ALL[0],
        };
        self.navigate(view);
        view
    }

    pub fn previous(&mut self) -> ViewId {
        let view = match self.current.view() {
            Some(view) => view.previous(),
            None => ViewId::ALL[ViewId::ALL.len() - 1],
        };
        self.navigate(view);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::from_token(view.token()), Some(view));
        }
        assert_eq!(ViewId::from_token("Dashboard"), None);
        assert_eq!(ViewId::from_token(""), None);
    }

    #[test]
    fn test_default_route_is_dashboard() {
        assert_eq!(ViewRouter::default().current(), &Route::Known(ViewId::Dashboard));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(ViewId::Settings.next(), ViewId::Dashboard);
        assert_eq!(ViewId::Dashboard.previous(), ViewId::Settings);
        assert_eq!(ViewId::Dashboard.next(), ViewId::HealthCard);
    }

    #[test]
    fn test_unknown_token_is_kept() {
        let mut router = ViewRouter::default();
        router.on_view_change("billing");
        assert_eq!(router.current(), &Route::Unrecognized("billing".to_string()));
        assert_eq!(router.current().view(), None);

        assert_eq!(router.next(), ViewId::Dashboard);
    }
}
