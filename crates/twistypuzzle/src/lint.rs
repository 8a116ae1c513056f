use serde::Serialize;

use crate::{ColorSetLookup, Puzzle, PuzzleDefinitionError, validate};

/// List of every rule a puzzle definition breaks.
///
/// Unlike [`validate::validate_puzzle()`], which stops at the first failure,
/// this runs every check so that an editor can show all problems at once.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Primary name of the puzzle.
    pub puzzle: String,
    /// Number of stickers.
    pub length: usize,
    /// Failed checks, in the order they were run.
    pub errors: Vec<PuzzleDefinitionError>,
}

impl ValidationReport {
    /// Runs every check on a puzzle definition.
    pub fn from_puzzle(puzzle: &Puzzle, lookup: &impl ColorSetLookup) -> Self {
        let errors = [
            validate::check_state_length(puzzle),
            validate::check_initial_state_charset(puzzle),
            validate::check_rotation_flags(puzzle),
            validate::check_color_set(puzzle, lookup),
            validate::check_move_coverage(puzzle),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        Self {
            puzzle: puzzle.name().to_owned(),
            length: puzzle.length,
            errors,
        }
    }

    /// Returns `true` if there are no issues with the puzzle definition.
    pub fn all_good(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Color, ColorSet, ColorSetCatalog, MoveSet, Rgb};

    #[test]
    fn test_report_collects_every_failure() {
        let catalog = ColorSetCatalog::from_iter([ColorSet::new("ab", "")
            .with_colors([Color::new('a', Rgb::BLACK), Color::new('b', Rgb::WHITE)])
            .unwrap()]);

        let mut puzzle = Puzzle::new("bad", "abcabc")
            .with_color_set("ab")
            .with_move(MoveSet::new("m", vec![vec![0, 1, 2]]));
        puzzle.rotation_flags = vec![-3];

        let report = ValidationReport::from_puzzle(&puzzle, &catalog);
        assert!(!report.all_good());
        assert_eq!(report.puzzle, "bad");
        assert_eq!(
            report.errors,
            [
                PuzzleDefinitionError::RotationFlagOutOfBounds {
                    index: 0,
                    flag: -3,
                    length: 6,
                },
                PuzzleDefinitionError::UnknownColorKey {
                    key: 'c',
                    color_set: "ab".to_string(),
                },
                PuzzleDefinitionError::IncompleteMoveCoverage {
                    covered: 3,
                    length: 6,
                },
            ],
        );
    }

    #[test]
    fn test_report_all_good() {
        let catalog = ColorSetCatalog::from_iter([ColorSet::new("ab", "")
            .with_colors([Color::new('a', Rgb::BLACK), Color::new('b', Rgb::WHITE)])
            .unwrap()]);
        let puzzle = Puzzle::new("flip", "ab")
            .with_color_set("ab")
            .with_move(MoveSet::new("flip", vec![vec![0, 1]]));

        let report = ValidationReport::from_puzzle(&puzzle, &catalog);
        assert!(report.all_good());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "puzzle": "flip", "length": 2, "errors": [] }),
        );
    }
}
