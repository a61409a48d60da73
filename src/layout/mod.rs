//! Chip row packing.
//!
//! Filter option labels render as pill-shaped chips laid out in
//! horizontal rows on the search screen. This module assigns each label
//! of a category to a row so that no multi-chip row exceeds the usable
//! screen width, then orders the rows widest-first for rendering.
//!
//! The algorithm is first-fit by arrival: labels are processed in
//! vocabulary order and placed into the first existing row (in creation
//! order) with room left, or into a fresh row otherwise. It deliberately
//! does not look for the tightest-fitting row; the output is a quirky but
//! fully deterministic packing, and callers rely on that determinism.

use crate::measure::MeasureText;
use crate::vocabulary::FilterCategory;

mod model;

pub use model::{ChipMetrics, PackedGroup, PackedRow};

/// Packs one category's labels into rows.
///
/// Each chip occupies `measured text width + padding`. A label joins the
/// first row where the row's cumulative width plus the chip width stays
/// strictly under `screen_width - edge_margin`; if no row has room, the
/// label starts a new row. A label too wide to fit anywhere still gets
/// its own row, wider than the screen. After placement the rows are
/// sorted by descending cumulative width; equal-width rows keep their
/// creation order.
///
/// Pure function: call again with a new `screen_width` (e.g. on device
/// rotation) to repack from scratch.
///
/// A non-positive usable width makes every label overflow, so the layout
/// degenerates to one label per row rather than failing.
pub fn pack_labels<S: AsRef<str>>(
    labels: &[S],
    screen_width: f64,
    metrics: &ChipMetrics,
    measure: &dyn MeasureText,
) -> Vec<PackedRow> {
    let capacity = metrics.capacity(screen_width);
    let mut rows: Vec<PackedRow> = Vec::new();

    for label in labels {
        let label = label.as_ref();
        let chip_width = measure.text_width(label, metrics.font_size) + metrics.padding;

        // First fit, scanning rows in creation order. A later, narrower
        // row may be skipped even when it would fit better.
        match rows.iter_mut().find(|row| row.width + chip_width < capacity) {
            Some(row) => row.push(label, chip_width),
            None => rows.push(PackedRow::seed(label, chip_width)),
        }
    }

    // Stable sort so equal-width rows keep creation order
    rows.sort_by(|a, b| {
        b.width
            .partial_cmp(&a.width)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    rows
}

/// Packs every category independently, preserving category order.
///
/// No label ever migrates between categories; each group is packed as if
/// it were the only one.
pub fn pack_categories(
    categories: &[FilterCategory],
    screen_width: f64,
    metrics: &ChipMetrics,
    measure: &dyn MeasureText,
) -> Vec<PackedGroup> {
    categories
        .iter()
        .map(|category| PackedGroup {
            category: category.name.clone(),
            rows: pack_labels(&category.options, screen_width, metrics, measure),
        })
        .collect()
}
