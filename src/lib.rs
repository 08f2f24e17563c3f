pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod meals;
pub mod state;
pub mod users;
