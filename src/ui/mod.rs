//! UI module for watchsac-tui
//!
//! This module contains UI rendering functions for the TUI interface:
//! page layout, form inputs, alert and forecast tables, and notices.

mod forms;
mod helpers;
mod render;
mod tables;

pub use render::render_app;
