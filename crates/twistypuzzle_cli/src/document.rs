use std::io::Read;
use std::sync::Arc;

use eyre::{Context, OptionExt, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use twistypuzzle::twistymath::Plane;
use twistypuzzle::{ColorSet, ColorSetCatalog, Puzzle};

/// Input file: color sets, the puzzles that reference them, and optionally
/// the current face planes of each puzzle.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PuzzleDocument {
    #[serde(default)]
    pub color_sets: Vec<ColorSet>,
    #[serde(default)]
    pub puzzles: Vec<Puzzle>,
    /// Face planes, keyed by puzzle name, as computed by the renderer for the
    /// current frame.
    #[serde(default)]
    pub faces: IndexMap<String, Vec<Plane>>,
}

impl PuzzleDocument {
    /// Reads a document from a file or stdin.
    pub fn read(mut input: clio::Input) -> Result<Self> {
        let mut buffer = String::new();
        input
            .read_to_string(&mut buffer)
            .wrap_err_with(|| format!("error reading {}", input.path()))?;
        Self::from_json(&buffer)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(s).context("error deserializing puzzle document")?;
        log::debug!(
            "loaded {} color sets and {} puzzles",
            doc.color_sets.len(),
            doc.puzzles.len(),
        );
        Ok(doc)
    }

    /// Collects the color sets into a catalog, rejecting duplicate IDs.
    pub fn catalog(&self) -> Result<ColorSetCatalog> {
        let mut catalog = ColorSetCatalog::new();
        for color_set in &self.color_sets {
            catalog.add(color_set.clone())?;
        }
        Ok(catalog)
    }

    /// Returns the puzzle with the given name.
    pub fn puzzle(&self, name: &str) -> Result<Arc<Puzzle>> {
        self.puzzles
            .iter()
            .find(|p| p.has_name(name))
            .map(|p| Arc::new(p.clone()))
            .ok_or_eyre(format!("no puzzle named {name:?}"))
    }

    /// Returns the face planes for the puzzle with the given name.
    pub fn faces(&self, puzzle: &Puzzle) -> &[Plane] {
        puzzle
            .names
            .iter()
            .find_map(|name| self.faces.get(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
