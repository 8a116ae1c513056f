use std::fmt;
use std::sync::Arc;

use crate::{MoveError, MoveSet, Puzzle};

impl MoveSet {
    /// Applies the move to a sticker array, permuting every cycle
    /// simultaneously.
    ///
    /// The sticker at each position of a cycle moves to the next position in
    /// that cycle. The array is left untouched if the move references a
    /// position outside the array or the same position twice.
    pub fn apply(&self, stickers: &mut [char]) -> Result<(), MoveError> {
        self.check_positions(stickers.len())?;

        let old = stickers.to_vec();
        for cycle in &self.swap_positions {
            for (&from, &to) in cycle.iter().zip(cycle.iter().cycle().skip(1)) {
                stickers[to] = old[from];
            }
        }
        log::trace!("applied move {:?}", self.name);
        Ok(())
    }

    /// Returns the move that undoes this one: every cycle reversed and the
    /// rotation turned the other way.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let name = match self.name.strip_suffix('\'') {
            Some(base) => base.to_owned(),
            None => format!("{}'", self.name),
        };
        Self {
            name,
            swap_positions: self
                .swap_positions
                .iter()
                .map(|cycle| cycle.iter().rev().copied().collect())
                .collect(),
            rotate: self.rotate.map(|mut r| {
                r.turn = -r.turn;
                r
            }),
        }
    }

    fn check_positions(&self, length: usize) -> Result<(), MoveError> {
        let mut seen = vec![false; length];
        for position in self.swap_positions.iter().flatten().copied() {
            match seen.get_mut(position) {
                None => {
                    return Err(MoveError::PositionOutOfRange {
                        name: self.name.clone(),
                        position,
                        length,
                    });
                }
                Some(seen) if *seen => {
                    return Err(MoveError::RepeatedPosition {
                        name: self.name.clone(),
                        position,
                    });
                }
                Some(seen) => *seen = true,
            }
        }
        Ok(())
    }
}

/// Puzzle together with the current arrangement of its stickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    puzzle: Arc<Puzzle>,
    pub(crate) stickers: Vec<char>,
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stickers.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl PuzzleState {
    /// Returns the initial state of a puzzle.
    pub fn new(puzzle: Arc<Puzzle>) -> Self {
        let stickers = puzzle.initial_stickers();
        Self { puzzle, stickers }
    }

    /// Returns the puzzle.
    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }
    /// Returns the current color key at each position.
    pub fn stickers(&self) -> &[char] {
        &self.stickers
    }
    /// Returns the current state as a string of color keys.
    pub fn as_string(&self) -> String {
        self.stickers.iter().collect()
    }

    /// Returns whether the stickers are arranged as in the initial state.
    pub fn is_solved(&self) -> bool {
        self.stickers.iter().copied().eq(self.puzzle.initial_state.chars())
    }

    /// Applies a move by name.
    pub fn apply_move(&mut self, name: &str) -> Result<(), MoveError> {
        match self.puzzle.move_set(name) {
            Some(m) => m.apply(&mut self.stickers),
            // "R'" is the inverse of "R" unless the puzzle defines it itself
            None => match name.strip_suffix('\'').and_then(|n| self.puzzle.move_set(n)) {
                Some(m) => m.inverse().apply(&mut self.stickers),
                None => Err(MoveError::NoSuchMove(name.to_owned())),
            },
        }
    }

    /// Applies a sequence of moves by name, stopping at the first error.
    ///
    /// Moves before the failing one remain applied.
    pub fn apply_moves<S: AsRef<str>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<(), MoveError> {
        names
            .into_iter()
            .try_for_each(|name| self.apply_move(name.as_ref()))
    }

    /// Returns a copy of the state with a sequence of moves applied.
    pub fn with_moves<S: AsRef<str>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, MoveError> {
        self.apply_moves(names)?;
        Ok(self)
    }
}
