//! Domain records and display fixtures for the health record app

pub mod community;
pub mod config;
pub mod directory;
pub mod health;
pub mod insights;
pub mod language;
pub mod rewards;
pub mod user;

pub use community::*;
pub use config::Config;
pub use directory::*;
pub use health::*;
pub use insights::*;
pub use language::*;
pub use rewards::*;
pub use user::*;
