//! tictactoe - two-player tic-tac-toe for one shared terminal
//!
//! This library carries the rule evaluation for the game: the 3×3 board
//! model with its compact string encoding, winning-line detection, and
//! whole-position classification. Classification works on arbitrary
//! positions, not only ones reachable through play, so external
//! collaborators can build a board from a string and ask what it means.
//! The interactive loop in the binary is a thin client of these pieces.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod output;
