//! The colors panel: the host component owning the working set of colors.

use crate::color::Color;

/// Access to a panel's color collection.
///
/// Both calls are wholesale: `get_colors` returns the full ordered
/// collection and `set_colors` replaces it.
pub trait ColorsPanel {
    fn get_colors(&self) -> Vec<Color>;
    fn set_colors(&mut self, colors: Vec<Color>);
}

/// Starter palette shown before anything is imported.
const DEFAULT_COLORS: [Color; 6] = [
    Color::rgb(231, 76, 60),
    Color::rgb(241, 196, 15),
    Color::rgb(46, 204, 113),
    Color::rgb(52, 152, 219),
    Color::rgb(155, 89, 182),
    Color::rgb(52, 73, 94),
];

/// In-memory ordered color collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    /// Bumped on every `set_colors`, so views can tell the collection was replaced
    revision: u64,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.to_vec())
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl ColorsPanel for Palette {
    fn get_colors(&self) -> Vec<Color> {
        self.colors.clone()
    }

    fn set_colors(&mut self, colors: Vec<Color>) {
        self.colors = colors;
        self.revision += 1;
    }
}
