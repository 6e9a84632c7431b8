//! Core game logic
//!
//! This module contains pure rule evaluation with no I/O dependencies.
//! Everything here operates on values passed in and returns results.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Player, Cell, Board, GameOutcome)
//! - `services/` - Winning-line detection and position classification

pub mod models;
pub mod services;
