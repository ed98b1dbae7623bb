//! Styling options for ROC plots.

use std::collections::HashMap;

use plotters::style::RGBColor;

/// Fallback color cycle for datasets without an explicit mapping.
///
/// Publication-friendly palette; the first three entries match the colors
/// conventionally used for high/mid/low separability comparisons.
pub const DEFAULT_PALETTE: [RGBColor; 8] = [
    RGBColor(230, 75, 53),
    RGBColor(77, 213, 118),
    RGBColor(28, 151, 204),
    RGBColor(60, 84, 136),
    RGBColor(243, 155, 127),
    RGBColor(132, 145, 180),
    RGBColor(145, 209, 194),
    RGBColor(220, 0, 0),
];

/// Styling for ROC plots.
///
/// `colors` is an explicit optional mapping from dataset name to color:
/// `None` means "no mapping supplied" and every dataset takes its color
/// from [`DEFAULT_PALETTE`] by position; with a mapping, unmapped datasets
/// fall back to the palette.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Overlay figure width in pixels. Default: 800.
    pub width: u32,
    /// Overlay figure height in pixels. Default: 800.
    pub height: u32,
    /// Size of each facet in a panel grid, in pixels. Default: (420, 420).
    pub panel_size: (u32, u32),
    /// Base font size for axis descriptions and titles. Default: 22.
    pub base_font: u32,
    /// Curve stroke width in pixels. Default: 2.
    pub line_width: u32,
    /// Optional dataset-name-to-color mapping.
    pub colors: Option<HashMap<String, RGBColor>>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            panel_size: (420, 420),
            base_font: 22,
            line_width: 2,
            colors: None,
        }
    }
}

impl PlotStyle {
    /// Create a style with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlay figure size in pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "figure size must be positive");
        self.width = width;
        self.height = height;
        self
    }

    /// Set the facet size for panel grids, in pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn panel_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "panel size must be positive");
        self.panel_size = (width, height);
        self
    }

    /// Set the base font size.
    pub fn base_font(mut self, size: u32) -> Self {
        self.base_font = size;
        self
    }

    /// Set the curve stroke width.
    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Supply an explicit dataset-name-to-color mapping.
    pub fn colors(mut self, colors: HashMap<String, RGBColor>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Resolve the color for a dataset.
    ///
    /// Looks the name up in the mapping when one was supplied; otherwise
    /// (or for unmapped names) cycles [`DEFAULT_PALETTE`] by position.
    pub fn color_for(&self, name: &str, index: usize) -> RGBColor {
        let fallback = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        match &self.colors {
            Some(map) => map.get(name).copied().unwrap_or(fallback),
            None => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_mapping_cycles_palette() {
        let style = PlotStyle::default();
        assert_eq!(style.color_for("anything", 0), DEFAULT_PALETTE[0]);
        assert_eq!(style.color_for("anything", 1), DEFAULT_PALETTE[1]);
        assert_eq!(
            style.color_for("anything", DEFAULT_PALETTE.len()),
            DEFAULT_PALETTE[0]
        );
    }

    #[test]
    fn mapping_wins_and_falls_back() {
        let mut colors = HashMap::new();
        colors.insert("mapped".to_string(), RGBColor(1, 2, 3));
        let style = PlotStyle::new().colors(colors);
        assert_eq!(style.color_for("mapped", 5), RGBColor(1, 2, 3));
        assert_eq!(style.color_for("unmapped", 5), DEFAULT_PALETTE[5]);
    }

    #[test]
    #[should_panic(expected = "figure size must be positive")]
    fn zero_size_panics() {
        let _ = PlotStyle::new().size(0, 100);
    }
}
