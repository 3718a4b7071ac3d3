pub mod error;
pub mod health_id;
pub mod mock_data;
pub mod models;
pub mod platform;
pub mod ui;
pub mod utils;
