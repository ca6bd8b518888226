//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. The window
//! drives the turn coordinator from its frame loop.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
