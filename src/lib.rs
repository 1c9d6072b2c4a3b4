//! Sidebar buttons for a terminal chat client.
//!
//! - [`buttons`]: the four button kinds and their shared render model
//! - [`signal`]: click dispatch to externally owned handlers
//! - [`palette`]: attribute name to style registry
//! - [`controller`]: the interfaces clicks are delivered to
//! - [`app`]: a small host that builds a sidebar from a TOML fixture

pub mod app;
pub mod buttons;
pub mod config;
pub mod controller;
pub mod error;
pub mod palette;
pub mod signal;

#[cfg(test)]
mod testing;

pub use buttons::{ButtonId, SidebarButton};
pub use error::{Result, SidebarError};
