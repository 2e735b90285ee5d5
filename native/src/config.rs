use crate::error::{ColorError, Result};
use crate::math::rgba::Rgba;

/// Step applied by each `pull` during a contrast search.
pub const DEFAULT_STEP: f64 = 0.01;

/// Tuning for the contrast search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Fraction of the remaining distance to `mean` covered per step.
    pub step: f64,
    /// Color the search pulls toward.
    pub mean: Rgba,
    /// Hard cap on steps. `None` relies on the fixed-point guard alone.
    pub max_steps: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            mean: Rgba::MEAN,
            max_steps: None,
        }
    }
}

impl SearchConfig {
    pub fn toward(mean: Rgba) -> Self {
        Self {
            mean,
            ..Self::default()
        }
    }

    /// Steps outside `(0, 1]` overshoot the mean, so candidates alternate and
    /// the fixed-point guard never fires.
    pub fn validate(&self) -> Result<()> {
        if self.step > 0.0 && self.step <= 1.0 {
            Ok(())
        } else {
            Err(ColorError::InvalidStep { step: self.step })
        }
    }
}
