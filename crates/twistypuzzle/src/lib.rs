//! Data-driven permutation puzzles: definitions, validation, move execution,
//! scrambling, and per-frame render data.
//!
//! A puzzle is a flat string of sticker color keys plus a list of named moves,
//! each of which is a set of disjoint cycles over sticker positions. Nothing
//! about a puzzle is hard-coded; every puzzle is described entirely by data
//! and must pass [`validate_puzzle()`] before it is accepted.

#[macro_use]
extern crate lazy_static;

mod colors;
mod errors;
pub mod frame;
mod lint;
mod puzzle;
mod rgb;
pub mod scramble;
mod state;
pub mod validate;


/// Re-export of `twistymath`.
pub use twistymath;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::colors::{Color, ColorSet, ColorSetCatalog, ColorSetLookup};
    pub use crate::errors::{ColorSetError, MoveError, PuzzleDefinitionError};
    pub use crate::frame::{Camera, Frame};
    pub use crate::lint::ValidationReport;
    pub use crate::puzzle::{MoveSet, Puzzle, Rotate};
    pub use crate::rgb::Rgb;
    pub use crate::scramble::{ScrambleParams, ScrambledPuzzle, scramble};
    pub use crate::state::PuzzleState;
    pub use crate::validate::validate_puzzle;
}
