//! Text measurement seam.
//!
//! The controller never measures glyphs itself. Hosts implement
//! [`TextMeasurer`] on top of their font stack; closures of the same shape work
//! too, which keeps tests short.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the text
    pub line_count: usize,
}

impl TextMetrics {
    /// Metrics for a single line of the given footprint.
    pub fn single_line(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            line_height: height,
            line_count: 1,
        }
    }
}

pub trait TextMeasurer {
    /// Measures `text` rendered at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f32) -> TextMetrics,
{
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        self(text, font_size)
    }
}

/// Fallback measurer used when the host does not provide one.
///
/// Every character advances by half the font size and lines are 1.25 font
/// sizes tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const CHAR_WIDTH_RATIO: f32 = 0.5;
    const LINE_HEIGHT_RATIO: f32 = 1.25;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);
        let char_width = font_size * Self::CHAR_WIDTH_RATIO;
        let line_height = font_size * Self::LINE_HEIGHT_RATIO;

        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * char_width)
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospaced_scales_with_font_size() {
        let metrics = MonospacedTextMeasurer.measure("rock", 20.0);
        assert_eq!(metrics.width, 40.0);
        assert_eq!(metrics.height, 25.0);
        assert_eq!(metrics.line_count, 1);
    }

    #[test]
    fn monospaced_uses_widest_line() {
        let metrics = MonospacedTextMeasurer.measure("post\nrock", 16.0);
        assert_eq!(metrics.width, 32.0);
        assert_eq!(metrics.line_count, 2);
        assert_eq!(metrics.height, 40.0);
    }

    #[test]
    fn closures_measure() {
        let fixed = |_: &str, _: f32| TextMetrics::single_line(100.0, 20.0);
        assert_eq!(fixed.measure("anything", 12.0).width, 100.0);
    }
}
