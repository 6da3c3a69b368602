//! Terminal User Interface module.
//!
//! This module provides the TUI for the podcast catalog browser:
//! - Main event loop (`run`)
//! - Input handling for browse, detail, and search modes
//! - Rendering for categories, podcasts, episodes and detail pages
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - View rendering dispatch
//! - `categories` - Category panel widget
//! - `podcasts` - Podcast list widget
//! - `episodes` - Episode list widget
//! - `detail` - Podcast and episode detail pages
//! - `status` - Status bar widget
//! - `tasks` - Background task spawning with panic reporting

mod categories;
mod detail;
mod episodes;
mod events;
mod input;
mod loop_runner;
mod podcasts;
mod render;
mod status;
mod tasks;

pub use loop_runner::{run, Action};
