//! Structural checks run on a puzzle definition before it is accepted.
//!
//! Each check is independent and side-effect free. The persistence layer is
//! expected to call [`validate_puzzle()`], which runs all of them, and reject
//! the write if any fails.

use itertools::Itertools;
use regex::Regex;

use crate::{ColorSet, ColorSetLookup, Puzzle, PuzzleDefinitionError};

lazy_static! {
    static ref WORD_CHAR: Regex = Regex::new(r"[[:word:]]").expect("error compiling regex");
}

/// Checks that the number of characters in the initial state equals the
/// puzzle length.
pub fn check_state_length(puzzle: &Puzzle) -> Result<(), PuzzleDefinitionError> {
    let actual = puzzle.initial_state.chars().count();
    if actual == puzzle.length {
        Ok(())
    } else {
        Err(PuzzleDefinitionError::StateLengthMismatch {
            actual,
            length: puzzle.length,
        })
    }
}

/// Checks that the initial state contains at least one ASCII word character
/// (letter, digit, or underscore).
///
/// This does not require *every* character to be alphanumeric; unknown
/// characters are caught by [`check_color_references()`].
pub fn check_initial_state_charset(puzzle: &Puzzle) -> Result<(), PuzzleDefinitionError> {
    if WORD_CHAR.is_match(&puzzle.initial_state) {
        Ok(())
    } else {
        Err(PuzzleDefinitionError::InvalidCharset {
            initial_state: puzzle.initial_state.clone(),
        })
    }
}

/// Checks that every rotation flag is in `0..=length`.
///
/// The upper bound is inclusive: a flag equal to `length` (one past the last
/// sticker) is accepted.
pub fn check_rotation_flags(puzzle: &Puzzle) -> Result<(), PuzzleDefinitionError> {
    let length = puzzle.length;
    let max = i64::try_from(length).unwrap_or(i64::MAX);
    match puzzle
        .rotation_flags
        .iter()
        .find_position(|&&flag| !(0..=max).contains(&flag))
    {
        Some((index, &flag)) => Err(PuzzleDefinitionError::RotationFlagOutOfBounds {
            index,
            flag,
            length,
        }),
        None => Ok(()),
    }
}

/// Checks that every character of the initial state is the key of some color
/// in `color_set`, reporting the first one that isn't.
pub fn check_color_references(
    puzzle: &Puzzle,
    color_set: &ColorSet,
) -> Result<(), PuzzleDefinitionError> {
    match puzzle
        .initial_state
        .chars()
        .find(|&c| color_set.get_char(c).is_none())
    {
        Some(key) => Err(PuzzleDefinitionError::UnknownColorKey {
            key,
            color_set: color_set.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Resolves the puzzle's color set, then runs [`check_color_references()`].
pub fn check_color_set(
    puzzle: &Puzzle,
    lookup: &impl ColorSetLookup,
) -> Result<(), PuzzleDefinitionError> {
    let color_set = puzzle
        .color_set(lookup)
        .ok_or_else(|| PuzzleDefinitionError::UnknownColorSet {
            id: puzzle.color_set_id.clone(),
        })?;
    check_color_references(puzzle, color_set)
}

/// Returns the number of distinct positions referenced by all moves,
/// including rotation anchors.
pub fn covered_position_count(puzzle: &Puzzle) -> usize {
    puzzle.referenced_positions().sorted().dedup().count()
}

/// Checks that the moves collectively reference exactly `length` distinct
/// positions.
///
/// Only the count is compared. The positions themselves are not required to
/// be `0..length`.
pub fn check_move_coverage(puzzle: &Puzzle) -> Result<(), PuzzleDefinitionError> {
    let covered = covered_position_count(puzzle);
    if covered == puzzle.length {
        Ok(())
    } else {
        Err(PuzzleDefinitionError::IncompleteMoveCoverage {
            covered,
            length: puzzle.length,
        })
    }
}

/// Runs every check, returning the first failure.
pub fn validate_puzzle(
    puzzle: &Puzzle,
    lookup: &impl ColorSetLookup,
) -> Result<(), PuzzleDefinitionError> {
    let result = (|| {
        check_state_length(puzzle)?;
        check_initial_state_charset(puzzle)?;
        check_rotation_flags(puzzle)?;
        check_color_set(puzzle, lookup)?;
        check_move_coverage(puzzle)
    })();

    match &result {
        Ok(()) => log::debug!("accepted puzzle {:?}", puzzle.name()),
        Err(e) => log::warn!("rejected puzzle {:?}: {e}", puzzle.name()),
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Color, ColorSetCatalog, MoveSet, Rgb};

    fn digits(keys: &str) -> ColorSet {
        ColorSet::new("digits", "Digits")
            .with_colors(keys.chars().map(|c| Color::new(c, Rgb::BLACK)))
            .unwrap()
    }

    fn ring() -> Puzzle {
        Puzzle::new("ring", "012012")
            .with_color_set("digits")
            .with_move(MoveSet::new("spin", vec![vec![0, 1, 2, 3, 4, 5]]))
    }

    #[test]
    fn test_charset() {
        assert_eq!(check_initial_state_charset(&ring()), Ok(()));
        assert_eq!(check_initial_state_charset(&Puzzle::new("p", "..a..")), Ok(()));
        assert_eq!(check_initial_state_charset(&Puzzle::new("p", "_")), Ok(()));
        assert_eq!(
            check_initial_state_charset(&Puzzle::new("p", "!?-")),
            Err(PuzzleDefinitionError::InvalidCharset {
                initial_state: "!?-".to_string(),
            }),
        );
        assert!(check_initial_state_charset(&Puzzle::new("p", "")).is_err());
    }

    #[test]
    fn test_rotation_flags() {
        let mut puzzle = ring();
        puzzle.rotation_flags = vec![0, 5];
        assert_eq!(check_rotation_flags(&puzzle), Ok(()));

        // equal to length is allowed
        puzzle.rotation_flags = vec![6];
        assert_eq!(check_rotation_flags(&puzzle), Ok(()));

        puzzle.rotation_flags = vec![2, 7];
        assert_eq!(
            check_rotation_flags(&puzzle),
            Err(PuzzleDefinitionError::RotationFlagOutOfBounds {
                index: 1,
                flag: 7,
                length: 6,
            }),
        );

        puzzle.rotation_flags = vec![-1];
        assert!(check_rotation_flags(&puzzle).is_err());
    }

    #[test]
    fn test_color_references() {
        assert_eq!(check_color_references(&ring(), &digits("012")), Ok(()));
        assert_eq!(check_color_references(&ring(), &digits("210")), Ok(()));
        assert_eq!(
            check_color_references(&ring(), &digits("01")),
            Err(PuzzleDefinitionError::UnknownColorKey {
                key: '2',
                color_set: "digits".to_string(),
            }),
        );
        // first missing key is reported
        assert_eq!(
            check_color_references(&ring(), &digits("2")),
            Err(PuzzleDefinitionError::UnknownColorKey {
                key: '0',
                color_set: "digits".to_string(),
            }),
        );
    }

    #[test]
    fn test_color_set_resolution() {
        let catalog = ColorSetCatalog::from_iter([digits("012")]);
        assert_eq!(check_color_set(&ring(), &catalog), Ok(()));

        let mut puzzle = ring();
        puzzle.color_set_id = Some("letters".to_string());
        assert_eq!(
            check_color_set(&puzzle, &catalog),
            Err(PuzzleDefinitionError::UnknownColorSet {
                id: Some("letters".to_string()),
            }),
        );
        puzzle.color_set_id = None;
        assert_eq!(
            check_color_set(&puzzle, &catalog),
            Err(PuzzleDefinitionError::UnknownColorSet { id: None }),
        );
    }

    #[test]
    fn test_move_coverage() {
        assert_eq!(check_move_coverage(&ring()), Ok(()));

        let partial = Puzzle::new("p", "012012")
            .with_move(MoveSet::new("a", vec![vec![0, 1]]))
            .with_move(MoveSet::new("b", vec![vec![1, 2, 3]]));
        assert_eq!(
            check_move_coverage(&partial),
            Err(PuzzleDefinitionError::IncompleteMoveCoverage {
                covered: 4,
                length: 6,
            }),
        );

        // rotation anchors count toward coverage
        let anchored = partial.clone().with_move(MoveSet::new("c", vec![vec![4]]).with_rotate(5, 1));
        assert_eq!(check_move_coverage(&anchored), Ok(()));

        // too many distinct positions also fails
        let over = ring().with_move(MoveSet::new("d", vec![vec![6, 7]]));
        assert_eq!(covered_position_count(&over), 8);
        assert!(check_move_coverage(&over).is_err());
    }

    #[test]
    fn test_move_coverage_counts_cardinality_only() {
        // Position 5 is never touched, but position 9 makes the count match.
        let puzzle = Puzzle::new("p", "012012")
            .with_move(MoveSet::new("a", vec![vec![0, 1, 2, 3, 4, 9]]));
        assert_eq!(check_move_coverage(&puzzle), Ok(()));
    }

    #[test]
    fn test_state_length() {
        assert_eq!(check_state_length(&ring()), Ok(()));
        let mut puzzle = ring();
        puzzle.length = 7;
        assert_eq!(
            check_state_length(&puzzle),
            Err(PuzzleDefinitionError::StateLengthMismatch {
                actual: 6,
                length: 7,
            }),
        );
    }

    #[test]
    fn test_validate_puzzle_reports_first_failure() {
        let catalog = ColorSetCatalog::from_iter([digits("01")]);
        let mut puzzle = ring();
        assert!(matches!(
            validate_puzzle(&puzzle, &catalog),
            Err(PuzzleDefinitionError::UnknownColorKey { key: '2', .. }),
        ));

        puzzle.rotation_flags = vec![100];
        assert!(matches!(
            validate_puzzle(&puzzle, &catalog),
            Err(PuzzleDefinitionError::RotationFlagOutOfBounds { flag: 100, .. }),
        ));

        let catalog = ColorSetCatalog::from_iter([digits("012")]);
        puzzle.rotation_flags = vec![];
        assert_eq!(validate_puzzle(&puzzle, &catalog), Ok(()));
    }
}
