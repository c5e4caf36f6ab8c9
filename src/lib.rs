pub mod api;
pub mod backend;
pub mod clock;
pub mod config;
pub mod error;
pub mod query;
