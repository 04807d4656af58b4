// Composition root: configuration, seed data, app state wiring and the inbound surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
