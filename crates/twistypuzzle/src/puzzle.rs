use serde::{Deserialize, Serialize};

use crate::{ColorSet, ColorSetLookup};

/// Twisty puzzle described as a flat array of stickers transformed by named
/// moves.
///
/// A puzzle may be incomplete while it is being edited (for example, before
/// a color set has been chosen). Run [`crate::validate_puzzle()`] before
/// accepting it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Display labels. The first one is the primary name.
    #[serde(default)]
    pub names: Vec<String>,
    /// Number of discrete orientations the puzzle supports.
    #[serde(default)]
    pub number_of_rotation: u32,
    /// Sticker indices used as anchors for layer rotations.
    #[serde(default)]
    pub rotation_flags: Vec<i64>,
    /// Color key of each sticker, in position order.
    pub initial_state: String,
    /// Number of stickers.
    pub length: usize,
    /// ID of the color set referenced by `initial_state`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_set_id: Option<String>,
    /// Moves that can be applied to the puzzle.
    #[serde(default)]
    pub move_sets: Vec<MoveSet>,
}
impl Puzzle {
    /// Constructs a puzzle with no moves and no color set, with `length` set
    /// from `initial_state`.
    pub fn new(name: impl Into<String>, initial_state: impl Into<String>) -> Self {
        let initial_state = initial_state.into();
        Self {
            names: vec![name.into()],
            length: initial_state.chars().count(),
            initial_state,
            ..Default::default()
        }
    }
    /// Sets the color set ID.
    #[must_use]
    pub fn with_color_set(mut self, color_set_id: impl Into<String>) -> Self {
        self.color_set_id = Some(color_set_id.into());
        self
    }
    /// Adds a move.
    #[must_use]
    pub fn with_move(mut self, move_set: MoveSet) -> Self {
        self.move_sets.push(move_set);
        self
    }

    /// Returns the primary name of the puzzle, or an empty string if it has
    /// none.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
    /// Returns whether `name` is one of the puzzle's display labels.
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the move with the given name.
    pub fn move_set(&self, name: &str) -> Option<&MoveSet> {
        self.move_sets.iter().find(|m| m.name == name)
    }
    /// Returns the names of all moves, in order.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.move_sets.iter().map(|m| m.name.as_str())
    }

    /// Resolves the puzzle's color set.
    pub fn color_set<'a>(&self, lookup: &'a impl ColorSetLookup) -> Option<&'a ColorSet> {
        lookup.color_set(self.color_set_id.as_deref()?)
    }

    /// Returns the stickers of the initial state as characters.
    pub fn initial_stickers(&self) -> Vec<char> {
        self.initial_state.chars().collect()
    }

    /// Returns every position referenced by any move, including rotation
    /// anchors, with repeats.
    pub fn referenced_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.move_sets.iter().flat_map(|m| m.positions())
    }
}

/// Named move: a set of disjoint cycles applied simultaneously, plus
/// optional rotation metadata for visualization.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveSet {
    /// Name of the move, such as `"R"`.
    pub name: String,
    /// Cycles of sticker positions. Each invocation of the move moves the
    /// sticker at each position to the next position in its cycle, wrapping
    /// around at the end.
    #[serde(default)]
    pub swap_positions: Vec<Vec<usize>>,
    /// Layer rotation shown while the move is animated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Rotate>,
}
impl MoveSet {
    /// Constructs a move from a list of cycles.
    pub fn new(name: impl Into<String>, swap_positions: Vec<Vec<usize>>) -> Self {
        Self {
            name: name.into(),
            swap_positions,
            rotate: None,
        }
    }
    /// Sets the rotation metadata.
    #[must_use]
    pub fn with_rotate(mut self, position: usize, turn: i32) -> Self {
        self.rotate = Some(Rotate { position, turn });
        self
    }

    /// Returns every position in every cycle, followed by the rotation anchor
    /// if there is one.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.swap_positions
            .iter()
            .flatten()
            .copied()
            .chain(self.rotate.map(|r| r.position))
    }

    /// Returns the number of times the move must be applied to return to the
    /// starting state: the least common multiple of its cycle lengths.
    ///
    /// Returns `None` if the order does not fit in a `usize`.
    pub fn order(&self) -> Option<usize> {
        fn gcd(a: usize, b: usize) -> usize {
            if b == 0 { a } else { gcd(b, a % b) }
        }
        self.swap_positions
            .iter()
            .map(|cycle| cycle.len().max(1))
            .try_fold(1_usize, |acc, len| (acc / gcd(acc, len)).checked_mul(len))
    }
}

/// Rotation metadata for a move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rotate {
    /// Sticker index that anchors the rotating layer.
    pub position: usize,
    /// Number of quarter turns (negative for counterclockwise).
    pub turn: i32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_puzzle_serde_field_names() {
        let json = r#"{
            "names": ["Tiny ring", "Ring"],
            "number_of_rotation": 4,
            "rotation_flags": [0, 3],
            "initial_state": "012012",
            "length": 6,
            "color_set_id": "digits",
            "move_sets": [
                {
                    "name": "spin",
                    "swap_positions": [[0, 1, 2, 3, 4, 5]],
                    "rotate": { "position": 0, "turn": 1 }
                },
                { "name": "swap", "swap_positions": [[0, 3]] }
            ]
        }"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle.name(), "Tiny ring");
        assert!(puzzle.has_name("Ring"));
        assert_eq!(puzzle.number_of_rotation, 4);
        assert_eq!(puzzle.rotation_flags, [0, 3]);
        assert_eq!(puzzle.color_set_id.as_deref(), Some("digits"));
        assert_eq!(puzzle.move_names().collect::<Vec<_>>(), ["spin", "swap"]);
        assert_eq!(
            puzzle.move_set("spin").and_then(|m| m.rotate),
            Some(Rotate {
                position: 0,
                turn: 1,
            }),
        );
        assert_eq!(puzzle.move_set("swap").and_then(|m| m.rotate), None);
    }

    #[test]
    fn test_puzzle_mid_edit() {
        let puzzle: Puzzle =
            serde_json::from_str(r#"{ "initial_state": "", "length": 0 }"#).unwrap();
        assert_eq!(puzzle.color_set_id, None);
        assert_eq!(puzzle.name(), "");
        assert!(puzzle.move_sets.is_empty());
    }

    #[test]
    fn test_referenced_positions() {
        let puzzle = Puzzle::new("p", "abcdef")
            .with_move(MoveSet::new("a", vec![vec![0, 1], vec![2, 3]]).with_rotate(4, -1))
            .with_move(MoveSet::new("b", vec![vec![1, 5]]));
        assert_eq!(puzzle.length, 6);
        assert_eq!(
            puzzle.referenced_positions().collect::<Vec<_>>(),
            [0, 1, 2, 3, 4, 1, 5],
        );
    }

    #[test]
    fn test_move_order() {
        assert_eq!(MoveSet::new("m", vec![]).order(), Some(1));
        assert_eq!(MoveSet::new("m", vec![vec![0, 1, 2, 3]]).order(), Some(4));
        assert_eq!(MoveSet::new("m", vec![vec![0, 1], vec![2, 3, 4]]).order(), Some(6));
        assert_eq!(MoveSet::new("m", vec![vec![0, 1, 2, 3], vec![4, 5]]).order(), Some(4));
    }

    #[test]
    fn test_move_order_overflow() {
        // Product of the primes up to 53 exceeds `u64::MAX`.
        const PRIMES: [usize; 16] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];
        let mut next = 0;
        let cycles = PRIMES
            .iter()
            .map(|&len| {
                let cycle = (next..next + len).collect();
                next += len;
                cycle
            })
            .collect();
        let m = MoveSet::new("big", cycles);
        assert_eq!(m.positions().count(), 381);
        assert_eq!(m.order(), None);

        let small = MoveSet::new("small", m.swap_positions[..5].to_vec());
        assert_eq!(small.order(), Some(2 * 3 * 5 * 7 * 11));
    }
}
