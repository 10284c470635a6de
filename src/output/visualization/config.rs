//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: dimensions in pixels
/// - `title`: plot title
/// - `xlabel`, `ylabel`: axis labels
/// - `line_color`: line color for single-profile plots
/// - `layer_colors`: optional colors for multi-layer plots (one per
///   plotted time layer)
/// - `background`: background color
/// - `line_width`: line thickness in pixels
/// - `show_grid`: whether to show grid lines
///
/// # Example
///
/// ```rust
/// use heat_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::profiles("Heated Rod");
/// config.width = 1920;
/// config.height = 1080;
/// assert_eq!(config.xlabel, "x");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Heat Distribution Over Time")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "u(x, t)")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-layer plots, one per plotted layer
    ///
    /// If None, a default palette is cycled.
    pub layer_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Heat Distribution Over Time".to_string(),
            xlabel: "x".to_string(),
            ylabel: "u(x, t)".to_string(),
            line_color: RED,
            layer_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Create a config for profile plots with a custom title
    pub fn profiles(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a config with explicit per-layer colors
    pub fn with_layer_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            layer_colors: Some(colors),
            ..Self::default()
        }
    }

    /// Color for the plotted layer at index `i`
    ///
    /// Uses custom colors if provided, otherwise cycles the default
    /// palette.
    pub(crate) fn layer_color(&self, i: usize) -> RGBColor {
        if let Some(ref colors) = self.layer_colors {
            if i < colors.len() {
                return colors[i];
            }
        }

        const PALETTE: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        PALETTE[i % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.xlabel, "x");
        assert_eq!(config.ylabel, "u(x, t)");
        assert!(config.show_grid);
    }

    #[test]
    fn test_profiles_config_sets_title() {
        let config = PlotConfig::profiles("Implicit Method");
        assert_eq!(config.title, "Implicit Method");
        assert_eq!(config.xlabel, "x");
    }

    #[test]
    fn test_layer_color_default_palette_cycles() {
        let config = PlotConfig::default();
        assert_eq!(config.layer_color(0), BLUE);
        assert_eq!(config.layer_color(1), RED);
        assert_eq!(config.layer_color(8), BLUE); // wraparound
    }

    #[test]
    fn test_layer_color_custom() {
        let config = PlotConfig::with_layer_colors(vec![GREEN, BLACK]);
        assert_eq!(config.layer_color(0), GREEN);
        assert_eq!(config.layer_color(1), BLACK);
        // Past the custom list, fall back to the palette
        assert_eq!(config.layer_color(2), GREEN);
    }
}
