//! Rule evaluation services
//!
//! Pure functions over domain models. These services have no I/O
//! dependencies - they operate on a board passed in and return results.
//!
//! - [`win`] - Winning-line detection for one player
//! - [`verdict`] - Whole-position classification

pub mod verdict;
pub mod win;

pub use verdict::classify;
pub use win::has_won;
