use crate::types::{Orientation, PaperSize};

/// Page margin on all four sides, in millimeters.
pub const MARGIN_MM: f32 = 20.0;

/// Vertical band reserved at the bottom of the content box for caption text
/// when captions are enabled. Subtracted from the image area, not the margin.
pub const CAPTION_BAND_MM: f32 = 20.0;

/// Gap between the bottom of the image and the first caption line.
pub const CAPTION_GAP_MM: f32 = 10.0;

pub const CAPTION_FONT_SIZE_PT: f32 = 10.0;

/// Caption line height as a multiple of the font size.
pub const CAPTION_LINE_HEIGHT: f32 = 1.2;

/// Caption text color, 8-bit RGB.
pub const CAPTION_COLOR: (u8, u8, u8) = (60, 60, 60);

pub const DEFAULT_OUTPUT_NAME: &str = "snapdoc-converted.pdf";

pub const MM_PER_PT: f32 = 25.4 / 72.0;
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Export configuration. Built once from the UI toggles and read-only input
/// to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub include_captions: bool,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_captions: true,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl RenderOptions {
    /// Physical page dimensions in mm with orientation applied.
    pub fn page_dimensions_mm(&self) -> (f32, f32) {
        self.paper_size.dimensions_with_orientation(self.orientation)
    }
}
