//! Fixed three-section card geometry.
//!
//! Anchors are laid out against a 195px-tall reference card; taller or
//! shorter cards shift every vertical anchor by half the height difference.

use crate::card::context::CardDimensions;

pub const BASE_HEIGHT: f64 = 195.0;

pub const RING_RADIUS: f64 = 40.0;
pub const RING_STROKE_WIDTH: f64 = 5.0;
/// Half-axes of the ellipse cut out of the ring behind the flame.
pub const RING_MASK_RX: f64 = 13.0;
pub const RING_MASK_RY: f64 = 18.0;

pub const NUMBER_FONT_SIZE: u32 = 28;
pub const LABEL_FONT_SIZE: u32 = 14;
pub const DATE_FONT_SIZE: u32 = 12;

/// Animation start delays in seconds.
pub mod delay {
    pub const RING: f64 = 0.4;
    pub const FIRE: f64 = 0.6;
    pub const CURRENT_NUMBER: f64 = 0.6;
    pub const CURRENT_LABEL: f64 = 0.9;
    pub const CURRENT_DATES: f64 = 0.9;
    pub const SIDE_NUMBERS: f64 = 0.5;
    pub const SIDE_LABELS: f64 = 0.65;
    pub const SIDE_DATES: f64 = 0.8;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub section_width: f64,
    /// Center of the total-contributions section.
    pub total_x: f64,
    pub center_x: f64,
    /// Center of the longest-streak section.
    pub longest_x: f64,
    pub side_number_y: f64,
    pub label_y: f64,
    pub date_y: f64,
    pub ring_center_y: f64,
    pub fire_icon_y: f64,
    pub center_number_y: f64,
    pub separator_top: f64,
    pub separator_bottom: f64,
}

impl Layout {
    /// Compute anchors for `dims`; `rtl` swaps the two side sections.
    pub fn new(dims: &CardDimensions, rtl: bool) -> Self {
        let width = dims.width;
        let offset = (dims.height - BASE_HEIGHT) / 2.0;
        let section_width = width / 3.0;
        let left_x = section_width / 2.0;
        let right_x = width - section_width / 2.0;
        let (total_x, longest_x) = if rtl {
            (right_x, left_x)
        } else {
            (left_x, right_x)
        };

        Self {
            width,
            height: dims.height,
            section_width,
            total_x,
            center_x: width / 2.0,
            longest_x,
            side_number_y: 79.0 + offset,
            label_y: 130.0 + offset,
            date_y: 158.0 + offset,
            ring_center_y: 72.0 + offset,
            fire_icon_y: 18.0 + offset,
            center_number_y: 79.0 + offset,
            separator_top: 28.0 + offset,
            separator_bottom: 170.0 + offset,
        }
    }

    /// x positions of the two vertical separators.
    pub fn separators(&self) -> [f64; 2] {
        [self.section_width, self.width - self.section_width]
    }

    /// Center of the ring mask cutout, just under the flame.
    pub fn mask_center(&self) -> (f64, f64) {
        (self.center_x, self.fire_icon_y + RING_MASK_RY)
    }
}
