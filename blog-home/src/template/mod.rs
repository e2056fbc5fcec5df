//! Askama templates for the home page
//!
//! [`HomeTemplate`] is a fully resolved view model: every URL has been
//! resolved and attribute-escaped, every copy fragment loaded. Building it is
//! the renderer's job; the template only lays it out.

pub mod helpers;
mod home;

pub use helpers::SafeString;
pub use home::{EntryView, HomeTemplate, TagView};
