//! Deterministic seeded scrambles.

use std::sync::Arc;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{MoveError, Puzzle, PuzzleState};

/// Default number of moves in a scramble.
///
/// **Changing this will change every scramble generated with the default
/// length.**
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 100;

/// Parameters to deterministically generate a move sequence to scramble a
/// puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Random seed. The same seed always produces the same scramble for the
    /// same puzzle.
    pub seed: String,
    /// Number of moves to apply.
    #[serde(default = "default_scramble_length")]
    pub length: u32,
}
impl ScrambleParams {
    /// Constructs scramble parameters with the default length.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        rand_chacha::ChaCha12Rng::from_seed(sha256.finalize().into())
    }
}

fn default_scramble_length() -> u32 {
    DEFAULT_SCRAMBLE_LENGTH
}

/// Scrambled puzzle state, along with the moves that produced it.
#[derive(Debug, Clone)]
pub struct ScrambledPuzzle {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Names of the moves applied, in order.
    pub moves: Vec<String>,
    /// State after applying all the moves.
    pub state: PuzzleState,
}

/// Scrambles a puzzle by applying `count` random moves chosen using `seed`.
pub fn scramble(
    puzzle: Arc<Puzzle>,
    seed: &str,
    count: u32,
) -> Result<ScrambledPuzzle, MoveError> {
    ScrambledPuzzle::generate(
        puzzle,
        ScrambleParams {
            seed: seed.to_owned(),
            length: count,
        },
    )
}

impl ScrambledPuzzle {
    /// Scrambles a puzzle according to `params`.
    ///
    /// A puzzle with no moves yields an empty scramble of the initial state.
    pub fn generate(puzzle: Arc<Puzzle>, params: ScrambleParams) -> Result<Self, MoveError> {
        let mut rng = params.rng();
        let random_moves =
            std::iter::from_fn(|| puzzle.move_sets.choose(&mut rng)).take(params.length as usize);

        let mut moves = vec![];
        let mut state = PuzzleState::new(Arc::clone(&puzzle));
        for m in random_moves {
            m.apply(&mut state.stickers)?;
            moves.push(m.name.clone());
        }
        log::debug!(
            "scrambled {:?} with {} moves from seed {:?}",
            puzzle.name(),
            moves.len(),
            params.seed,
        );

        Ok(Self {
            params,
            moves,
            state,
        })
    }
}
