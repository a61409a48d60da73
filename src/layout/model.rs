use serde::{Deserialize, Serialize};

/// Chip styling constants that feed into packed widths.
///
/// The padding models the chip's horizontal content insets plus the
/// rounded-corner styling; it is added to the measured text width to get
/// the space a chip actually occupies in a row. The edge margin is the
/// horizontal breathing room kept between a row and the screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChipMetrics {
    /// Font size passed to the text measurer
    pub font_size: f64,
    /// Horizontal padding added to each measured label width
    pub padding: f64,
    /// Margin subtracted from the screen width to get row capacity
    pub edge_margin: f64,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        ChipMetrics {
            font_size: 18.0,
            padding: 26.0,
            edge_margin: 8.0,
        }
    }
}

impl ChipMetrics {
    /// Usable row width for a given screen width.
    pub fn capacity(&self, screen_width: f64) -> f64 {
        screen_width - self.edge_margin
    }
}

/// One packed row of chips: the labels assigned to it and their
/// cumulative width.
///
/// Rows only ever grow; labels are appended one at a time and never
/// removed or moved to another row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedRow {
    /// Sum of the packed widths of all labels in this row
    pub width: f64,
    /// Labels in the order they were assigned
    pub labels: Vec<String>,
}

impl PackedRow {
    pub(crate) fn seed(label: &str, chip_width: f64) -> Self {
        PackedRow {
            width: chip_width,
            labels: vec![label.to_string()],
        }
    }

    pub(crate) fn push(&mut self, label: &str, chip_width: f64) {
        self.width += chip_width;
        self.labels.push(label.to_string());
    }
}

/// The packed rows for one filter category, sorted by descending width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedGroup {
    /// Category name, used as the section header when rendering
    pub category: String,
    /// Rows in render order (widest first)
    pub rows: Vec<PackedRow>,
}

impl PackedGroup {
    /// Total number of labels across all rows.
    pub fn label_count(&self) -> usize {
        self.rows.iter().map(|row| row.labels.len()).sum()
    }
}
