pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod logging;
pub mod render;

pub use context::AppContext;
