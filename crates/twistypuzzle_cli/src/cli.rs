use std::path::PathBuf;

use eyre::{Context, OptionExt, Result, bail};
use rand::Rng;
use serde::Serialize;
use twistypuzzle::prelude::*;
use twistypuzzle::scramble::DEFAULT_SCRAMBLE_LENGTH;
use twistypuzzle::twistymath::Mat4;

use crate::document::PuzzleDocument;
use crate::prefs::ViewPreferences;

/// Validate, twist, scramble, and render data-driven permutation puzzles.
///
/// Input files are JSON documents of the form
/// `{ "color_sets": [...], "puzzles": [...] }`. Use '-' to read from stdin.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// View preferences file (YAML) layered over the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Validate every puzzle in a document and print a report as JSON.
    ///
    /// Exits with an error if any puzzle is rejected.
    Validate {
        /// Puzzle document, use '-' for stdin.
        #[arg(value_parser)]
        file: clio::Input,
    },
    /// Apply moves to a puzzle and print the resulting stickers.
    Apply {
        /// Puzzle document, use '-' for stdin.
        #[arg(value_parser)]
        file: clio::Input,
        /// Name of the puzzle.
        puzzle: String,
        /// Names of the moves to apply, in order. Append `'` to a move name
        /// to apply its inverse.
        moves: Vec<String>,
    },
    /// Scramble a puzzle and print the moves and resulting state as JSON.
    Scramble {
        /// Puzzle document, use '-' for stdin.
        #[arg(value_parser)]
        file: clio::Input,
        /// Name of the puzzle.
        puzzle: String,
        /// Random seed. If omitted, a random one is chosen.
        #[arg(long)]
        seed: Option<String>,
        /// Number of moves.
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        count: u32,
    },
    /// Print the camera matrices and face visibility for a puzzle as JSON.
    Frame {
        /// Puzzle document, use '-' for stdin.
        #[arg(value_parser)]
        file: clio::Input,
        /// Name of the puzzle.
        puzzle: String,
        /// Viewport width divided by height.
        #[arg(long, default_value_t = 1.0)]
        aspect: f64,
        /// Move being animated.
        #[arg(long = "move")]
        move_name: Option<String>,
        /// Animation progress of the move, from 0 to 1.
        #[arg(long, default_value_t = 1.0)]
        progress: f64,
    },
}

#[derive(Serialize, Debug)]
struct ScrambleOutput<'a> {
    puzzle: &'a str,
    seed: &'a str,
    moves: &'a [String],
    state: String,
}

#[derive(Serialize, Debug)]
struct FrameOutput<'a> {
    puzzle: &'a str,
    camera: Camera,
    #[serde(flatten)]
    frame: Frame,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer_rotation: Option<Mat4>,
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &ViewPreferences) -> Result<()> {
    match subcommand {
        Subcommand::Validate { file } => {
            let doc = PuzzleDocument::read(file)?;
            let catalog = doc.catalog()?;
            let reports: Vec<ValidationReport> = doc
                .puzzles
                .iter()
                .map(|puzzle| ValidationReport::from_puzzle(puzzle, &catalog))
                .collect();
            write_json_output(&reports)?;

            let rejected = reports.iter().filter(|r| !r.all_good()).count();
            if rejected > 0 {
                bail!("{rejected} of {} puzzles rejected", reports.len());
            }
            Ok(())
        }

        Subcommand::Apply {
            file,
            puzzle,
            moves,
        } => {
            let doc = PuzzleDocument::read(file)?;
            let puzzle = doc.puzzle(&puzzle)?;
            warn_if_invalid(&doc, &puzzle)?;
            let state = PuzzleState::new(puzzle)
                .with_moves(&moves)
                .context("error applying moves")?;
            println!("{state}");
            Ok(())
        }

        Subcommand::Scramble {
            file,
            puzzle,
            seed,
            count,
        } => {
            let doc = PuzzleDocument::read(file)?;
            let puzzle = doc.puzzle(&puzzle)?;
            warn_if_invalid(&doc, &puzzle)?;
            let seed = seed.unwrap_or_else(|| rand::rng().random::<u64>().to_string());
            let scrambled = scramble(puzzle, &seed, count).context("error scrambling puzzle")?;
            write_json_output(&ScrambleOutput {
                puzzle: scrambled.state.puzzle().name(),
                seed: &scrambled.params.seed,
                moves: &scrambled.moves,
                state: scrambled.state.as_string(),
            })
        }

        Subcommand::Frame {
            file,
            puzzle,
            aspect,
            move_name,
            progress,
        } => {
            let doc = PuzzleDocument::read(file)?;
            let puzzle = doc.puzzle(&puzzle)?;
            let planes = doc.faces(&puzzle);
            let camera = prefs.camera(aspect);

            let mut frame = camera.frame(planes);
            if prefs.show_backfaces {
                frame.visible_faces.fill(true);
            }

            let layer_rotation = match move_name {
                Some(name) => {
                    let move_set = puzzle
                        .move_set(&name)
                        .ok_or_eyre(format!("no move named {name:?}"))?;
                    let rotation = twistypuzzle::frame::move_rotation(move_set, planes, progress);
                    if rotation.is_none() {
                        log::warn!("move {name:?} has no face to rotate around");
                    }
                    rotation
                }
                None => None,
            };

            write_json_output(&FrameOutput {
                puzzle: puzzle.name(),
                camera,
                frame,
                layer_rotation,
            })
        }
    }
}

/// Logs a warning if the puzzle would be rejected, but continues anyway so
/// that puzzles can be tried out while they are being edited.
fn warn_if_invalid(doc: &PuzzleDocument, puzzle: &Puzzle) -> Result<()> {
    let catalog = doc.catalog()?;
    if validate_puzzle(puzzle, &catalog).is_err() {
        log::warn!("continuing with invalid puzzle {:?}", puzzle.name());
    }
    Ok(())
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
