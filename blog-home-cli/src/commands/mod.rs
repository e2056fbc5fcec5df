//! CLI command implementations

pub mod config;
pub mod render;

pub use config::ConfigCommand;
pub use render::RenderCommand;
