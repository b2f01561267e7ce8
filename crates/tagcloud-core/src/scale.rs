//! Weight to display-size mapping.
//!
//! Sizes follow a logarithmic curve anchored at the smallest weight of the
//! active set:
//!
//! ```text
//! multiplier   = (max_font_size - min_font_size) / (max - min)
//! display_size = min_font_size + ln(0.01 + (weight - min) * multiplier)
//! ```
//!
//! The curve is weakly monotonic in weight. A set with a single distinct weight
//! has no spread to scale over, so every entry gets `min_font_size`.

/// Smallest font size the curve is anchored to.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Upper bound used to spread the weight range.
pub const MAX_FONT_SIZE: f32 = 100.0;

/// Offset inside the logarithm; also the lower clamp for its argument.
const LOG_FLOOR: f32 = 0.01;

/// Maps raw weights to display sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightScaler {
    min_font_size: f32,
    max_font_size: f32,
}

impl Default for WeightScaler {
    fn default() -> Self {
        Self {
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
        }
    }
}

impl WeightScaler {
    pub fn new(min_font_size: f32, max_font_size: f32) -> Self {
        Self {
            min_font_size,
            max_font_size,
        }
    }

    pub fn min_font_size(&self) -> f32 {
        self.min_font_size
    }

    pub fn max_font_size(&self) -> f32 {
        self.max_font_size
    }

    /// Fits the curve to the extrema of `weights`.
    ///
    /// Returns `None` for an empty set.
    pub fn fit<I>(&self, weights: I) -> Option<WeightScale>
    where
        I: IntoIterator<Item = f32>,
    {
        let (min, max) = weights
            .into_iter()
            .fold(None, |acc: Option<(f32, f32)>, w| match acc {
                None => Some((w, w)),
                Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
            })?;

        // A spread too narrow to divide by overflows; treat it like no spread.
        let multiplier = (max > min)
            .then(|| (self.max_font_size - self.min_font_size) / (max - min))
            .filter(|multiplier| multiplier.is_finite());

        Some(WeightScale {
            min_font_size: self.min_font_size,
            min_weight: min,
            max_weight: max,
            multiplier,
        })
    }

    /// Returns one display size per input weight, in input order.
    pub fn scale(&self, weights: &[f32]) -> Vec<f32> {
        match self.fit(weights.iter().copied()) {
            Some(scale) => weights.iter().map(|&w| scale.display_size(w)).collect(),
            None => Vec::new(),
        }
    }
}

/// A curve fitted to one set of weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightScale {
    min_font_size: f32,
    min_weight: f32,
    max_weight: f32,
    /// `None` when every weight in the set is equal, or too close to divide by.
    multiplier: Option<f32>,
}

impl WeightScale {
    pub fn min_weight(&self) -> f32 {
        self.min_weight
    }

    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    /// Returns true when the fitted set has a single distinct weight.
    pub fn is_degenerate(&self) -> bool {
        self.multiplier.is_none()
    }

    pub fn display_size(&self, weight: f32) -> f32 {
        let Some(multiplier) = self.multiplier else {
            return self.min_font_size;
        };
        // Weights outside the fitted range can push the argument to zero or
        // past f32::MAX; keep it where ln stays finite.
        let argument =
            (LOG_FLOOR + (weight - self.min_weight) * multiplier).clamp(LOG_FLOOR, f32::MAX);
        self.min_font_size + argument.ln()
    }
}

#[cfg(test)]
#[path = "tests/scale_tests.rs"]
mod tests;
