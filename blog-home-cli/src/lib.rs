//! blog-home CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

pub use commands::{ConfigCommand, RenderCommand};

/// Service name used for configuration discovery
pub const SERVICE_NAME: &str = "blog-home";
