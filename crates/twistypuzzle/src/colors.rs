use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ColorSetError, Rgb};

/// Sticker color, referenced by its key from puzzle state strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    /// Key used in puzzle state strings, usually a single character.
    pub key: String,
    /// Display color.
    pub hex: Rgb,
    /// Human-friendly name, such as `"red"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
impl Color {
    /// Constructs an unnamed color.
    pub fn new(key: impl Into<String>, hex: Rgb) -> Self {
        Self {
            key: key.into(),
            hex,
            name: None,
        }
    }

    /// Returns the key as a single character, or `None` if the key is not
    /// exactly one character long.
    pub fn key_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    }

    /// Returns the name of the color, falling back to its key.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }
}

/// Named, ordered set of colors with unique keys.
///
/// Puzzles refer to a color set by ID and never own it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "ColorSetData", into = "ColorSetData")]
pub struct ColorSet {
    /// Color set ID.
    pub id: String,
    /// Human-friendly name for the color set.
    pub name: String,
    colors: IndexMap<String, Color>,
}
impl ColorSet {
    /// Returns an empty color set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors: IndexMap::new(),
        }
    }

    /// Adds a color to the end of the set. Returns an error if a color with
    /// the same key already exists.
    pub fn add(&mut self, color: Color) -> Result<(), ColorSetError> {
        if self.colors.contains_key(&color.key) {
            return Err(ColorSetError::DuplicateColorKey {
                color_set: self.id.clone(),
                key: color.key,
            });
        }
        self.colors.insert(color.key.clone(), color);
        Ok(())
    }
    /// Adds several colors, stopping at the first duplicate key.
    pub fn with_colors(
        mut self,
        colors: impl IntoIterator<Item = Color>,
    ) -> Result<Self, ColorSetError> {
        for color in colors {
            self.add(color)?;
        }
        Ok(self)
    }

    /// Returns the color with the given key.
    pub fn get(&self, key: &str) -> Option<&Color> {
        self.colors.get(key)
    }
    /// Returns the color whose key is the single character `c`.
    pub fn get_char(&self, c: char) -> Option<&Color> {
        self.get(c.encode_utf8(&mut [0; 4]))
    }
    /// Returns whether there is a color with the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.colors.contains_key(key)
    }

    /// Returns an iterator over the colors in order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.values()
    }
    /// Returns an iterator over the color keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(|k| k.as_str())
    }

    /// Returns whether there are no colors in the color set.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    /// Returns the number of colors in the color set.
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

/// Serialized form of a [`ColorSet`], which may contain duplicate keys.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct ColorSetData {
    id: String,
    #[serde(default)]
    name: String,
    colors: Vec<Color>,
}
impl TryFrom<ColorSetData> for ColorSet {
    type Error = ColorSetError;

    fn try_from(value: ColorSetData) -> Result<Self, Self::Error> {
        ColorSet::new(value.id, value.name).with_colors(value.colors)
    }
}
impl From<ColorSet> for ColorSetData {
    fn from(value: ColorSet) -> Self {
        Self {
            id: value.id,
            name: value.name,
            colors: value.colors.into_values().collect(),
        }
    }
}

/// Source of color sets by ID.
///
/// Puzzles hold only the ID of their color set; anything that can resolve IDs
/// (an in-memory catalog, a database layer) implements this trait.
pub trait ColorSetLookup {
    /// Returns the color set with the given ID.
    fn color_set(&self, id: &str) -> Option<&ColorSet>;
}

/// In-memory collection of color sets, indexed by ID.
#[derive(Debug, Default, Clone)]
pub struct ColorSetCatalog {
    sets: IndexMap<String, ColorSet>,
}
impl ColorSetCatalog {
    /// Constructs an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color set. Returns an error if a set with the same ID already
    /// exists.
    pub fn add(&mut self, color_set: ColorSet) -> Result<(), ColorSetError> {
        if self.sets.contains_key(&color_set.id) {
            return Err(ColorSetError::DuplicateColorSetId(color_set.id));
        }
        log::debug!("added color set {:?}", color_set.id);
        self.sets.insert(color_set.id.clone(), color_set);
        Ok(())
    }
    /// Removes a color set, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<ColorSet> {
        self.sets.shift_remove(id)
    }

    /// Returns an iterator over all color sets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorSet> {
        self.sets.values()
    }
}
impl ColorSetLookup for ColorSetCatalog {
    fn color_set(&self, id: &str) -> Option<&ColorSet> {
        self.sets.get(id)
    }
}
impl FromIterator<ColorSet> for ColorSetCatalog {
    /// Collects color sets into a catalog. Later sets replace earlier sets
    /// with the same ID.
    fn from_iter<T: IntoIterator<Item = ColorSet>>(iter: T) -> Self {
        Self {
            sets: iter.into_iter().map(|set| (set.id.clone(), set)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rgb_set() -> ColorSet {
        ColorSet::new("rgb", "Red green blue")
            .with_colors([
                Color::new("R", Rgb::new(255, 0, 0)),
                Color::new("G", Rgb::new(0, 255, 0)),
                Color::new("B", Rgb::new(0, 0, 255)),
            ])
            .unwrap()
    }

    #[test]
    fn test_color_set_preserves_order() {
        let set = rgb_set();
        assert_eq!(set.keys().collect::<Vec<_>>(), ["R", "G", "B"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get_char('G').map(|c| c.hex), Some(Rgb::new(0, 255, 0)));
        assert!(set.get("Y").is_none());
    }

    #[test]
    fn test_color_set_rejects_duplicate_key() {
        let mut set = rgb_set();
        assert_eq!(
            set.add(Color::new("G", Rgb::BLACK)),
            Err(ColorSetError::DuplicateColorKey {
                color_set: "rgb".to_string(),
                key: "G".to_string(),
            }),
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_color_key_char() {
        assert_eq!(Color::new("R", Rgb::BLACK).key_char(), Some('R'));
        assert_eq!(Color::new("Rd", Rgb::BLACK).key_char(), None);
        assert_eq!(Color::new("", Rgb::BLACK).key_char(), None);
    }

    #[test]
    fn test_color_set_serde() {
        let json = r##"{
            "id": "bw",
            "name": "Black and white",
            "colors": [
                { "key": "0", "hex": "#000000", "name": "black" },
                { "key": "1", "hex": "#fff" }
            ]
        }"##;
        let set: ColorSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.get("0").map(Color::display_name), Some("black"));
        assert_eq!(set.get("1").map(Color::display_name), Some("1"));
        assert_eq!(set.get("1").map(|c| c.hex), Some(Rgb::WHITE));

        let roundtripped: ColorSet =
            serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
        assert_eq!(roundtripped, set);
    }

    #[test]
    fn test_color_set_serde_rejects_duplicate_key() {
        let json = r##"{
            "id": "bad",
            "colors": [
                { "key": "0", "hex": "#000000" },
                { "key": "0", "hex": "#ffffff" }
            ]
        }"##;
        assert!(serde_json::from_str::<ColorSet>(json).is_err());
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = ColorSetCatalog::new();
        catalog.add(rgb_set()).unwrap();
        assert!(catalog.color_set("rgb").is_some());
        assert!(catalog.color_set("cmy").is_none());
        assert_eq!(
            catalog.add(rgb_set()),
            Err(ColorSetError::DuplicateColorSetId("rgb".to_string())),
        );
        assert!(catalog.remove("rgb").is_some());
        assert!(catalog.color_set("rgb").is_none());
    }
}
