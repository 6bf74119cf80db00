//! Default swatches and the recently used custom colors.

use crate::color::Color;

/// Number of recent custom colors kept by default.
pub const DEFAULT_RECENT_CAPACITY: usize = 8;

/// The fixed default swatches.
pub const DEFAULT_PALETTE: [Color; 20] = [
    Color::rgb(0, 0, 0),
    Color::rgb(255, 255, 255),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 255, 0),
    Color::rgb(255, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(128, 128, 128),
    Color::rgb(192, 192, 192),
    Color::rgb(128, 0, 0),
    Color::rgb(0, 128, 0),
    Color::rgb(0, 0, 128),
    Color::rgb(128, 128, 0),
    Color::rgb(128, 0, 128),
    Color::rgb(0, 128, 128),
    Color::rgb(255, 165, 0),
    Color::rgb(255, 192, 203),
    Color::rgb(160, 82, 45),
    Color::rgb(128, 0, 128),
];

/// A set of swatches. Colors outside it count as custom colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}

impl Palette {
    pub fn new(swatches: Vec<Color>) -> Self {
        Self { swatches }
    }

    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Check whether a color is one of the swatches.
    pub fn contains(&self, color: Color) -> bool {
        self.swatches.iter().any(|&swatch| swatch == color)
    }

    /// Check whether a color is a custom color (not a swatch).
    pub fn is_custom(&self, color: Color) -> bool {
        !self.contains(color)
    }
}

/// Most-recently-used custom colors, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentColors {
    colors: Vec<Color>,
    capacity: usize,
}

impl Default for RecentColors {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentColors {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a used color. Colors already in the list are left where they are.
    ///
    /// Returns true if the list changed.
    pub fn push(&mut self, color: Color) -> bool {
        if self.capacity == 0 || self.colors.contains(&color) {
            return false;
        }
        self.colors.insert(0, color);
        self.colors.truncate(self.capacity);
        true
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_membership() {
        let palette = Palette::default();
        assert_eq!(palette.swatches().len(), 20);
        assert!(palette.contains(Color::rgb(255, 165, 0)));
        assert!(palette.contains(Color::new(160, 82, 45, 0.995)));
        assert!(palette.is_custom(Color::rgb(1, 2, 3)));
        assert!(palette.is_custom(Color::new(255, 0, 0, 0.5)));
    }

    #[test]
    fn test_recent_prepends_newest() {
        let mut recent = RecentColors::default();
        assert!(recent.push(Color::rgb(1, 1, 1)));
        assert!(recent.push(Color::rgb(2, 2, 2)));
        assert_eq!(recent.colors(), &[Color::rgb(2, 2, 2), Color::rgb(1, 1, 1)]);
    }

    #[test]
    fn test_recent_deduplicates() {
        let mut recent = RecentColors::default();
        recent.push(Color::rgb(1, 1, 1));
        recent.push(Color::rgb(2, 2, 2));
        assert!(!recent.push(Color::new(1, 1, 1, 0.999)));
        assert_eq!(recent.len(), 2);
        assert_eq!(recent.colors()[0], Color::rgb(2, 2, 2));
    }

    #[test]
    fn test_recent_capacity() {
        let mut recent = RecentColors::default();
        for i in 0..12u8 {
            recent.push(Color::rgb(i, i, i));
        }
        assert_eq!(recent.len(), 8);
        assert_eq!(recent.colors()[0], Color::rgb(11, 11, 11));
        assert_eq!(recent.colors()[7], Color::rgb(4, 4, 4));
    }
}
