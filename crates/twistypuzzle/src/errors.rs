use serde::Serialize;
use thiserror::Error;

/// Reason a puzzle definition is rejected.
///
/// Any one of these rejects the whole definition; there is no partial
/// acceptance.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleDefinitionError {
    /// The initial state contains no alphanumeric characters.
    #[error("initial state {initial_state:?} contains no alphanumeric characters")]
    InvalidCharset {
        /// Offending initial state.
        initial_state: String,
    },
    /// A rotation flag is outside `0..=length`.
    #[error("rotation flag #{index} is {flag}, which is outside 0..={length}")]
    RotationFlagOutOfBounds {
        /// Index of the flag in `rotation_flags`.
        index: usize,
        /// Value of the flag.
        flag: i64,
        /// Puzzle length.
        length: usize,
    },
    /// The initial state uses a color key that is not in the color set.
    #[error("color key {key:?} does not exist in color set {color_set:?}")]
    UnknownColorKey {
        /// First unresolved key.
        key: char,
        /// ID of the color set that was searched.
        color_set: String,
    },
    /// The moves do not reference exactly as many distinct positions as there
    /// are stickers.
    #[error("moves reference {covered} distinct positions but the puzzle has {length} stickers")]
    IncompleteMoveCoverage {
        /// Number of distinct positions referenced by moves.
        covered: usize,
        /// Puzzle length.
        length: usize,
    },
    /// The initial state does not have one character per sticker.
    #[error("initial state has {actual} stickers but the puzzle length is {length}")]
    StateLengthMismatch {
        /// Number of characters in the initial state.
        actual: usize,
        /// Puzzle length.
        length: usize,
    },
    /// The puzzle's color set ID is missing or does not resolve.
    #[error("unknown color set {id:?}")]
    UnknownColorSet {
        /// Color set ID, if the puzzle has one.
        id: Option<String>,
    },
}

/// Error produced when building a color set or catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorSetError {
    /// Two colors in the same set share a key.
    #[error("duplicate color key {key:?} in color set {color_set:?}")]
    DuplicateColorKey {
        /// ID of the color set.
        color_set: String,
        /// Duplicated key.
        key: String,
    },
    /// Two color sets in the same catalog share an ID.
    #[error("duplicate color set ID {0:?}")]
    DuplicateColorSetId(String),
}

/// Error produced when applying a move to a puzzle state.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no move named {0:?}")]
    NoSuchMove(String),
    #[error("move {name:?} references position {position} but the puzzle has {length} stickers")]
    PositionOutOfRange {
        name: String,
        position: usize,
        length: usize,
    },
    #[error("move {name:?} references position {position} more than once")]
    RepeatedPosition { name: String, position: usize },
}
