// File: crates/outlook-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub grid_minor: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub observed: skia::Color,
    pub scenario: skia::Color,
    pub marker_edge: skia::Color,
    pub legend_fill: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 0, 0, 0),       // ~0.3 alpha
            grid_minor: skia::Color::from_argb(26, 0, 0, 0), // ~0.1 alpha
            axis_line: skia::Color::from_argb(255, 40, 40, 40),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            observed: skia::Color::from_argb(255, 0, 0, 0),
            scenario: skia::Color::from_argb(204, 255, 215, 0), // gold, 0.8 alpha
            marker_edge: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            grid_minor: skia::Color::from_argb(255, 28, 28, 32),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            observed: skia::Color::from_argb(255, 235, 235, 245),
            scenario: skia::Color::from_argb(230, 255, 215, 0),
            marker_edge: skia::Color::from_argb(255, 18, 18, 20),
            legend_fill: skia::Color::from_argb(230, 30, 30, 34),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
