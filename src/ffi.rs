//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! The host supplies text measurement through a callback interface, since
//! only the platform's text engine knows real rendered widths.

use crate::layout::{pack_categories, pack_labels, ChipMetrics, PackedGroup, PackedRow};
use crate::measure::MeasureText;
use crate::selection::{SelectionError, SelectionState};
use crate::vocabulary::{self, FilterCategory};
use std::sync::{Arc, Mutex};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum FilterError {
    #[error("Unknown filter category: {message}")]
    UnknownCategory { message: String },
}

impl From<SelectionError> for FilterError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::UnknownCategory(name) => FilterError::UnknownCategory { message: name },
        }
    }
}

/// Text measurement supplied by the host platform.
///
/// Implementations must return a non-negative width for every label in
/// the filter vocabulary.
#[uniffi::export(callback_interface)]
pub trait TextMeasurer: Send + Sync {
    /// Returns the rendered width of `text` at `font_size`, in the same
    /// units as the screen width passed to the packer.
    fn text_width(&self, text: String, font_size: f64) -> f64;
}

/// Adapts a foreign measurer to the crate-internal trait.
struct ForeignMeasure(Box<dyn TextMeasurer>);

impl MeasureText for ForeignMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self.0.text_width(text.to_string(), font_size)
    }
}

/// FFI-safe chip styling constants.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiChipMetrics {
    /// Font size passed to the text measurer
    pub font_size: f64,
    /// Horizontal padding added to each measured label width
    pub padding: f64,
    /// Margin subtracted from the screen width to get row capacity
    pub edge_margin: f64,
}

impl From<FfiChipMetrics> for ChipMetrics {
    fn from(m: FfiChipMetrics) -> Self {
        ChipMetrics {
            font_size: m.font_size,
            padding: m.padding,
            edge_margin: m.edge_margin,
        }
    }
}

impl From<ChipMetrics> for FfiChipMetrics {
    fn from(m: ChipMetrics) -> Self {
        FfiChipMetrics {
            font_size: m.font_size,
            padding: m.padding,
            edge_margin: m.edge_margin,
        }
    }
}

/// FFI-safe representation of a filter category.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCategory {
    /// Display name, also used as the selection-state key
    pub name: String,
    /// Option labels in display order
    pub options: Vec<String>,
}

impl From<&FilterCategory> for FfiCategory {
    fn from(c: &FilterCategory) -> Self {
        FfiCategory {
            name: c.name.clone(),
            options: c.options.clone(),
        }
    }
}

/// One packed row of chips.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPackedRow {
    /// Cumulative packed width of the row
    pub width: f64,
    /// Labels in assignment order
    pub labels: Vec<String>,
}

impl From<&PackedRow> for FfiPackedRow {
    fn from(row: &PackedRow) -> Self {
        FfiPackedRow {
            width: row.width,
            labels: row.labels.clone(),
        }
    }
}

/// Packed rows for one category, widest row first.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPackedGroup {
    /// Category name, used as the section header when rendering
    pub category: String,
    /// Rows in render order
    pub rows: Vec<FfiPackedRow>,
}

impl From<&PackedGroup> for FfiPackedGroup {
    fn from(group: &PackedGroup) -> Self {
        FfiPackedGroup {
            category: group.category.clone(),
            rows: group.rows.iter().map(FfiPackedRow::from).collect(),
        }
    }
}

/// The full packed layout for the search screen.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiChipLayout {
    /// One group per category, in category order
    pub groups: Vec<FfiPackedGroup>,
    /// The same layout as JSON, for hosts that prefer structured decoding
    pub raw_json: String,
}

impl From<&[PackedGroup]> for FfiChipLayout {
    fn from(groups: &[PackedGroup]) -> Self {
        let raw_json = serde_json::to_string(groups).unwrap_or_default();
        FfiChipLayout {
            groups: groups.iter().map(FfiPackedGroup::from).collect(),
            raw_json,
        }
    }
}

/// An active filter set entry: a category and its selected labels.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiActiveFilter {
    pub category: String,
    /// Selected labels, sorted
    pub labels: Vec<String>,
}

/// FFI-safe selection state, one instance per search screen.
///
/// Replaces the shared singleton the original UI used: the host owns the
/// instance and passes it where it is needed.
#[derive(uniffi::Object)]
pub struct FfiSelection {
    inner: Mutex<SelectionState>,
}

#[uniffi::export]
impl FfiSelection {
    /// Creates an empty selection over the standard categories.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(FfiSelection {
            inner: Mutex::new(SelectionState::new()),
        })
    }

    /// Flips a label's selected state; returns true if it is now selected.
    pub fn toggle(&self, category: String, label: String) -> Result<bool, FilterError> {
        Ok(self.lock().toggle(&category, &label)?)
    }

    /// Marks a label selected. Returns true if it was not selected before.
    pub fn select(&self, category: String, label: String) -> Result<bool, FilterError> {
        Ok(self.lock().select(&category, &label)?)
    }

    /// Unmarks a label. Returns true if it was selected before.
    pub fn deselect(&self, category: String, label: String) -> Result<bool, FilterError> {
        Ok(self.lock().deselect(&category, &label)?)
    }

    /// True if the label is currently selected in the category.
    pub fn is_selected(&self, category: String, label: String) -> bool {
        self.lock().is_selected(&category, &label)
    }

    /// Returns the selected labels in a category, sorted.
    pub fn selected_in(&self, category: String) -> Result<Vec<String>, FilterError> {
        Ok(self.lock().selected_in(&category)?)
    }

    /// Total number of selected labels across all categories.
    pub fn count(&self) -> u32 {
        self.lock().len() as u32
    }

    /// Deselects everything.
    pub fn clear(&self) {
        self.lock().clear()
    }

    /// Collects the active filter set for a search request, in category
    /// order, skipping categories with no selection.
    pub fn active_filters(&self) -> Vec<FfiActiveFilter> {
        self.lock()
            .active_filters()
            .into_iter()
            .map(|(category, labels)| FfiActiveFilter { category, labels })
            .collect()
    }

    /// Returns the selection state as a JSON string.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&*self.lock()).unwrap_or_default()
    }
}

impl FfiSelection {
    fn lock(&self) -> std::sync::MutexGuard<'_, SelectionState> {
        // A poisoned lock still holds consistent selection data
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Returns the four standard filter categories in display order.
#[uniffi::export]
pub fn standard_categories() -> Vec<FfiCategory> {
    vocabulary::standard_categories()
        .iter()
        .map(FfiCategory::from)
        .collect()
}

/// Returns the search-screen section headers (the category names).
#[uniffi::export]
pub fn search_headers() -> Vec<String> {
    vocabulary::search_headers()
}

/// Returns the browse-screen section headers.
#[uniffi::export]
pub fn browse_headers() -> Vec<String> {
    vocabulary::browse_headers()
}

/// Returns the default chip styling constants.
#[uniffi::export]
pub fn default_chip_metrics() -> FfiChipMetrics {
    ChipMetrics::default().into()
}

/// Packs the standard filter vocabulary into chip rows for a screen width.
///
/// Each category is packed independently; within a category the rows come
/// back widest-first. Call again with a new width (e.g. after rotation)
/// to repack from scratch.
///
/// # Arguments
/// * `screen_width` - Usable screen width in the host's layout units
/// * `metrics` - Chip styling constants; pass None for the defaults
/// * `measurer` - Host text measurement callback
#[uniffi::export]
pub fn pack_filter_chips(
    screen_width: f64,
    metrics: Option<FfiChipMetrics>,
    measurer: Box<dyn TextMeasurer>,
) -> FfiChipLayout {
    let metrics: ChipMetrics = metrics.map(Into::into).unwrap_or_default();
    let measure = ForeignMeasure(measurer);
    let categories = vocabulary::standard_categories();
    let groups = pack_categories(&categories, screen_width, &metrics, &measure);
    FfiChipLayout::from(groups.as_slice())
}

/// Packs an arbitrary label list into chip rows.
///
/// Useful for dynamic chips outside the fixed vocabulary, such as the
/// diet tags on the recipe detail screen.
#[uniffi::export]
pub fn pack_filter_labels(
    labels: Vec<String>,
    screen_width: f64,
    metrics: Option<FfiChipMetrics>,
    measurer: Box<dyn TextMeasurer>,
) -> Vec<FfiPackedRow> {
    let metrics: ChipMetrics = metrics.map(Into::into).unwrap_or_default();
    let measure = ForeignMeasure(measurer);
    pack_labels(&labels, screen_width, &metrics, &measure)
        .iter()
        .map(FfiPackedRow::from)
        .collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance measurer standing in for a platform text engine.
    struct TestMeasurer;

    impl TextMeasurer for TestMeasurer {
        fn text_width(&self, text: String, font_size: f64) -> f64 {
            text.chars().count() as f64 * 0.55 * font_size
        }
    }

    #[test]
    fn test_standard_categories_exported() {
        let categories = standard_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[3].name, "Cuisine");
        assert_eq!(categories[3].options.len(), 26);
    }

    #[test]
    fn test_pack_filter_chips_covers_vocabulary() {
        let layout = pack_filter_chips(375.0, None, Box::new(TestMeasurer));
        assert_eq!(layout.groups.len(), 4);

        for (group, category) in layout.groups.iter().zip(standard_categories()) {
            assert_eq!(group.category, category.name);
            let packed: usize = group.rows.iter().map(|r| r.labels.len()).sum();
            assert_eq!(packed, category.options.len());
            for pair in group.rows.windows(2) {
                assert!(pair[0].width >= pair[1].width);
            }
        }
    }

    #[test]
    fn test_raw_json_decodes_to_groups() {
        let layout = pack_filter_chips(375.0, None, Box::new(TestMeasurer));
        let parsed: Vec<PackedGroup> = serde_json::from_str(&layout.raw_json).unwrap();
        assert_eq!(parsed.len(), layout.groups.len());
        for (group, ffi_group) in parsed.iter().zip(&layout.groups) {
            assert_eq!(group.category, ffi_group.category);
            assert_eq!(group.rows.len(), ffi_group.rows.len());
        }
    }

    #[test]
    fn test_custom_metrics_forwarded() {
        let metrics = FfiChipMetrics {
            font_size: 18.0,
            padding: 0.0,
            edge_margin: 8.0,
        };
        // "Drink" at 18pt with 0.55 advance measures 49.5; no padding
        let rows = pack_filter_labels(
            vec!["Drink".to_string()],
            375.0,
            Some(metrics),
            Box::new(TestMeasurer),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].labels, vec!["Drink"]);
        assert!((rows[0].width - 49.5).abs() < 1e-9);
    }

    #[test]
    fn test_selection_object_toggle_and_collect() {
        let selection = FfiSelection::new();

        assert!(selection
            .toggle("Diet".to_string(), "Vegan".to_string())
            .unwrap());
        assert!(selection
            .toggle("Cuisine".to_string(), "Thai".to_string())
            .unwrap());
        assert_eq!(selection.count(), 2);

        let active = selection.active_filters();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].category, "Diet");
        assert_eq!(active[1].category, "Cuisine");

        assert!(!selection
            .toggle("Diet".to_string(), "Vegan".to_string())
            .unwrap());
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_selection_unknown_category_is_error() {
        let selection = FfiSelection::new();
        let err = selection
            .toggle("Allergens".to_string(), "Peanuts".to_string())
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownCategory { .. }));
    }

    #[test]
    fn test_selection_snapshot_is_valid_json() {
        let selection = FfiSelection::new();
        selection
            .select("Meal".to_string(), "Dessert".to_string())
            .unwrap();
        let snapshot = selection.snapshot_json();
        let parsed: SelectionState = serde_json::from_str(&snapshot).unwrap();
        assert!(parsed.is_selected("Meal", "Dessert"));
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
