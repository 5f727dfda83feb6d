pub mod app;
pub mod config;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod example;
pub mod latency;
pub mod leave;
pub mod mock;
pub mod profile;
pub mod state;
pub mod travel;
pub mod users;
