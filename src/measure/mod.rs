//! Text measurement contract.
//!
//! Chip widths depend on the rendered width of each label, which only the
//! host platform's text engine knows. The packer takes a [`MeasureText`]
//! implementation so the host (UIKit, Android, a test fixture) supplies
//! the measurement and the layout logic stays platform-free.

/// Measures the rendered width of a piece of text at a given font size.
///
/// Implementations must be total: every label in the filter vocabulary
/// must produce a non-negative width. The packer has no recovery path for
/// a failed measurement, so there is none to report.
pub trait MeasureText {
    /// Returns the rendered width of `text` at `font_size`, in the same
    /// units as the screen width passed to the packer (typically points).
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// A deterministic monospace approximation.
///
/// Width is `character count × advance × font_size`. Useful as a test
/// fixture and as a fallback for hosts without a native text engine; real
/// apps should measure with the platform toolkit instead.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    /// Per-character advance as a fraction of the font size
    pub advance: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        // Roughly the average advance of a UI font at text sizes
        FixedAdvance { advance: 0.55 }
    }
}

impl MeasureText for FixedAdvance {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * self.advance * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_scales_with_length_and_size() {
        let measure = FixedAdvance { advance: 0.5 };
        assert_eq!(measure.text_width("ab", 10.0), 10.0);
        assert_eq!(measure.text_width("abcd", 10.0), 20.0);
        assert_eq!(measure.text_width("ab", 20.0), 20.0);
    }

    #[test]
    fn test_fixed_advance_counts_chars_not_bytes() {
        let measure = FixedAdvance { advance: 1.0 };
        // "Crème" is 5 chars but 6 bytes
        assert_eq!(measure.text_width("Crème", 1.0), 5.0);
    }

    #[test]
    fn test_empty_text_is_zero_width() {
        let measure = FixedAdvance::default();
        assert_eq!(measure.text_width("", 18.0), 0.0);
    }
}
