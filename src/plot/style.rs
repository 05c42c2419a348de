//! Fixed style configuration per chart variant.
//!
//! Every knob a renderer recognizes is enumerated here with an explicit
//! default, instead of an open-ended bag of options threaded through the
//! drawing calls.

use plotters::style::RGBColor;
use plotters::style::full_palette::{BROWN, ORANGE, PINK, PURPLE};
use plotters::style::{BLUE, GREEN, RED};

/// Curve colors for the comparative overlay, cycled by request position.
pub const COMPARISON_PALETTE: [RGBColor; 6] = [RED, GREEN, PURPLE, ORANGE, BROWN, PINK];

/// Styling for the single-fit overlay chart.
#[derive(Debug, Clone)]
pub struct SingleFitStyle {
    pub data_color: RGBColor,
    pub curve_color: RGBColor,
    pub point_size: u32,
    /// Curve samples over the data's x-span.
    pub curve_samples: usize,
    /// Curve samples over the default unit domain when the data is empty.
    pub fallback_samples: usize,
    pub size: (u32, u32),
}

impl Default for SingleFitStyle {
    fn default() -> Self {
        Self {
            data_color: BLUE,
            curve_color: RED,
            point_size: 3,
            curve_samples: 400,
            fallback_samples: 100,
            size: (1000, 600),
        }
    }
}

/// Styling for the residual scatter chart.
#[derive(Debug, Clone)]
pub struct ResidualStyle {
    pub data_color: RGBColor,
    pub zero_line_color: RGBColor,
    pub point_size: u32,
    pub size: (u32, u32),
}

impl Default for ResidualStyle {
    fn default() -> Self {
        Self {
            data_color: GREEN,
            zero_line_color: RED,
            point_size: 3,
            size: (1000, 600),
        }
    }
}

/// Styling for the comparative overlay chart.
#[derive(Debug, Clone)]
pub struct ComparativeStyle {
    pub data_color: RGBColor,
    pub palette: [RGBColor; 6],
    pub point_size: u32,
    pub curve_samples: usize,
    pub fallback_samples: usize,
    pub size: (u32, u32),
}

impl Default for ComparativeStyle {
    fn default() -> Self {
        Self {
            data_color: BLUE,
            palette: COMPARISON_PALETTE,
            point_size: 3,
            curve_samples: 400,
            fallback_samples: 100,
            size: (1200, 700),
        }
    }
}

impl ComparativeStyle {
    /// Curve color for the degree at `position` in the comparison request.
    pub fn curve_color(&self, position: usize) -> RGBColor {
        self.palette[position % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_position() {
        let style = ComparativeStyle::default();
        assert_eq!(style.curve_color(0), style.palette[0]);
        assert_eq!(style.curve_color(6), style.palette[0]);
        assert_eq!(style.curve_color(8), style.palette[2]);
    }
}
