pub mod app;
pub mod commands;
pub mod directory;
pub mod events;
pub mod handlers;
pub mod projections;
pub mod schedules;
pub mod state;
pub mod templates;
