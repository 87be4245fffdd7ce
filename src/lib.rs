pub mod config;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod session;
pub mod templates_structs;
