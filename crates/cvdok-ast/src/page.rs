//! Page geometry handed to the renderer

use serde::{Deserialize, Serialize};

/// Typographic points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Page margins, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Same margin on all four sides
    pub fn uniform(points: f32) -> Self {
        Self {
            top: points,
            right: points,
            bottom: points,
            left: points,
        }
    }
}

/// Page size and margins, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    /// US Letter (8.5 x 11 in) with 0.75 in margins on every side
    pub fn letter() -> Self {
        Self {
            width: 8.5 * POINTS_PER_INCH,
            height: 11.0 * POINTS_PER_INCH,
            margins: Margins::uniform(0.75 * POINTS_PER_INCH),
        }
    }

    /// Width available for content between the left and right margins
    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}
