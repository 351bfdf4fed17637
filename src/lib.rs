pub mod cli;
pub mod config;
pub mod observability;
pub mod render;
pub mod session;

pub use config::Config;
