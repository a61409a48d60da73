pub mod ffi;
pub mod layout;
pub mod measure;
pub mod selection;
pub mod vocabulary;

pub use layout::{pack_categories, pack_labels, ChipMetrics, PackedGroup, PackedRow};
pub use measure::{FixedAdvance, MeasureText};
pub use selection::{SelectionError, SelectionState};
pub use vocabulary::{browse_headers, search_headers, standard_categories, FilterCategory};

uniffi::setup_scaffolding!();
