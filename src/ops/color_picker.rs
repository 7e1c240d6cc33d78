use crate::model::color::Color;
use crate::model::config::PaletteConfig;

/// Swatches per row in the picker popover
pub const SWATCHES_PER_ROW: usize = 4;

/// View-state of a color picker: a button showing the current color and a
/// popover grid of swatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPicker {
    pub label: String,
    pub palette: Vec<Color>,
    pub value: Option<Color>,
    pub default_color: Color,
    open: bool,
}

impl ColorPicker {
    pub fn new(config: &PaletteConfig) -> Self {
        ColorPicker {
            label: config.label.clone(),
            palette: config.colors.clone(),
            value: None,
            default_color: config.default_color.clone(),
            open: false,
        }
    }

    pub fn with_value(mut self, value: Option<Color>) -> Self {
        self.value = value;
        self
    }

    /// The color shown on the button
    pub fn selected(&self) -> &Color {
        self.value.as_ref().unwrap_or(&self.default_color)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick a swatch. Closes the popover and returns the color to report
    /// as a change, or `None` when the color is not in the palette.
    pub fn select(&mut self, color: &Color) -> Option<Color> {
        let picked = self.palette.iter().find(|c| c.same_as(color))?.clone();
        self.value = Some(picked.clone());
        self.open = false;
        Some(picked)
    }

    /// The palette laid out in grid rows
    pub fn rows(&self) -> Vec<&[Color]> {
        self.palette.chunks(SWATCHES_PER_ROW).collect()
    }
}
