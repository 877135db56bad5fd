//! Configuration types for the engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Calendar grid geometry used by the layout component.
///
/// All pixel values are fixed-point decimals so positions computed from
/// them stay exact; widths and offsets are percentages of a day column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Height of the day header above the time grid, in pixels.
    pub header_height_px: Decimal,
    /// Vertical scale of the grid, in pixels per minute.
    pub pixels_per_minute: Decimal,
    /// The hour of day the grid starts at (the vertical origin).
    pub grid_start_hour: u32,
    /// The hour of day the grid ends at.
    pub grid_end_hour: u32,
    /// The fraction of a day column usable by blocks, as a percentage.
    pub usable_width_percent: Decimal,
    /// Left margin before the first block, as a percentage.
    pub left_margin_percent: Decimal,
    /// Horizontal gap between side-by-side blocks, as a percentage.
    pub column_gap_percent: Decimal,
    /// Floor for block heights, keeping very short blocks clickable.
    pub min_block_height_px: Decimal,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            header_height_px: Decimal::new(48, 0),
            pixels_per_minute: Decimal::new(5, 1),
            grid_start_hour: 6,
            grid_end_hour: 22,
            usable_width_percent: Decimal::new(95, 0),
            left_margin_percent: Decimal::new(25, 1),
            column_gap_percent: Decimal::new(5, 1),
            min_block_height_px: Decimal::new(12, 0),
        }
    }
}

impl GridConfig {
    /// Checks the grid for inconsistencies, returning a description of the
    /// first problem found.
    pub fn validation_error(&self) -> Option<String> {
        if self.pixels_per_minute <= Decimal::ZERO {
            return Some("pixels_per_minute must be positive".to_string());
        }
        if self.grid_start_hour >= self.grid_end_hour {
            return Some("grid_start_hour must be before grid_end_hour".to_string());
        }
        if self.grid_end_hour > 24 {
            return Some("grid_end_hour must be at most 24".to_string());
        }
        if self.usable_width_percent <= Decimal::ZERO {
            return Some("usable_width_percent must be positive".to_string());
        }
        if self.left_margin_percent < Decimal::ZERO || self.column_gap_percent < Decimal::ZERO {
            return Some("margins and gaps must not be negative".to_string());
        }
        if self.left_margin_percent + self.usable_width_percent > Decimal::new(100, 0) {
            return Some("left margin plus usable width must not exceed 100%".to_string());
        }
        if self.min_block_height_px < Decimal::ZERO {
            return Some("min_block_height_px must not be negative".to_string());
        }
        None
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Calendar grid geometry.
    pub grid: GridConfig,
}
