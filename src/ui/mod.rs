pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod navigation;
pub mod router;
pub mod screens;
pub mod state;
pub mod view;

pub use app::{run_app_async, ArogyaApp, Phase};
pub use events::{AppEvent, EventManager, Scheduler, TimerFired, TimerKind};
pub use router::{Route, ViewId, ViewRouter};
pub use state::{LogLevel, NotificationCenter, Toast};
pub use view::{AppMessage, Outbox, View, ViewContext, ViewFactory};
