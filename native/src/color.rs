//! The extended color value type.
//!
//! An [`ExtendedColor`] wraps one canonical [`Rgba`] and never changes after
//! construction. Every operation hands back a new value:
//!
//! - directed movement: [`approach`](ExtendedColor::approach),
//!   [`depart`](ExtendedColor::depart), [`move_to`](ExtendedColor::move_to)
//! - mean reversion: [`pull`](ExtendedColor::pull),
//!   [`push`](ExtendedColor::push), [`revert`](ExtendedColor::revert)
//! - legibility: [`luminance`](ExtendedColor::luminance),
//!   [`contrast_ratio`](ExtendedColor::contrast_ratio),
//!   [`contrast`](ExtendedColor::contrast)

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::{ColorError, Result};
use crate::math::color_parse::{normalize, ColorParam};
use crate::math::composite::composite_over;
use crate::math::movement::move_channels;
use crate::math::rgba::Rgba;
use crate::math::wcag::{self, WcagResult};
use crate::types::ColorValue;

/// Neutral gray every mean-reversion shortcut defaults to.
pub const GLOBAL_MEAN: Rgba = Rgba::MEAN;

/// Build an [`ExtendedColor`] from any accepted color parameter.
pub fn make_color(param: impl Into<ColorParam>) -> Result<ExtendedColor> {
    normalize(param.into()).map(ExtendedColor::new)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedColor {
    color: Rgba,
}

impl ExtendedColor {
    pub fn new(color: Rgba) -> Self {
        Self { color }
    }

    pub fn rgba(&self) -> Rgba {
        self.color
    }

    pub fn approach(&self, color: impl Into<ColorParam>, amount: f64) -> Result<Self> {
        self.move_to(color, amount, false)
    }

    pub fn depart(&self, color: impl Into<ColorParam>, amount: f64) -> Result<Self> {
        self.move_to(color, -amount, false)
    }

    /// Shift every channel `amount` of the way toward `target` (away when
    /// negative). `absolute` enables the mean-distance compensation.
    pub fn move_to(&self, target: impl Into<ColorParam>, amount: f64, absolute: bool) -> Result<Self> {
        let target = normalize(target.into())?;
        Ok(Self::new(move_channels(&self.color, &target, amount, absolute)))
    }

    /// Compensated move toward `mean`, or [`GLOBAL_MEAN`] when none is given.
    pub fn revert(&self, amount: f64, mean: Option<ColorParam>) -> Result<Self> {
        let baseline = match mean {
            Some(mean) => normalize(mean)?,
            None => GLOBAL_MEAN,
        };
        Ok(self.revert_to(amount, &baseline))
    }

    /// Move toward the mean: neutralizes the color.
    pub fn pull(&self, amount: f64, mean: Option<ColorParam>) -> Result<Self> {
        self.revert(amount, mean)
    }

    /// Move away from the mean: increases separation from neutral.
    pub fn push(&self, amount: f64, mean: Option<ColorParam>) -> Result<Self> {
        self.revert(-amount, mean)
    }

    pub(crate) fn revert_to(&self, amount: f64, mean: &Rgba) -> Self {
        Self::new(move_channels(&self.color, mean, amount, true))
    }

    pub fn luminance(&self) -> f64 {
        wcag::relative_luminance(&self.color)
    }

    /// Directed ratio of this color's luminance over `other`'s. Not symmetric.
    pub fn contrast_ratio(&self, other: &ExtendedColor) -> f64 {
        wcag::directed_ratio(self.luminance(), other.luminance())
    }

    /// Symmetric WCAG ratio, always >= 1.
    pub fn wcag_ratio(&self, other: &ExtendedColor) -> f64 {
        wcag::contrast_ratio(&self.color, &other.color)
    }

    pub fn wcag(&self, other: &ExtendedColor, large_text: bool) -> WcagResult {
        wcag::check_wcag_thresholds(self.wcag_ratio(other), large_text)
    }

    /// Pull toward [`GLOBAL_MEAN`] in steps of 0.01 until the ratio of this
    /// color over the candidate reaches `min_ratio`.
    pub fn contrast(&self, min_ratio: f64) -> Result<Self> {
        self.contrast_with(min_ratio, &SearchConfig::default())
    }

    /// Same search as [`contrast`](Self::contrast), pulling toward `mean`.
    pub fn contrast_toward(&self, min_ratio: f64, mean: impl Into<ColorParam>) -> Result<Self> {
        let mean = normalize(mean.into())?;
        self.contrast_with(min_ratio, &SearchConfig::toward(mean))
    }

    /// Fixed-step pull search. At least one step is always taken. Fails once
    /// two consecutive candidates render to the same hex, or `max_steps` runs out.
    /// The step must lie in `(0, 1]`; larger steps overshoot the mean and oscillate.
    pub fn contrast_with(&self, min_ratio: f64, config: &SearchConfig) -> Result<Self> {
        config.validate()?;

        let mut candidate = *self;
        let mut previous_hex: Option<String> = None;
        let mut best_ratio = f64::MIN;
        let mut steps = 0usize;

        loop {
            candidate = candidate.revert_to(config.step, &config.mean);
            steps += 1;

            let hex = candidate.hex();
            if previous_hex.as_deref() == Some(hex.as_str()) {
                debug!(min_ratio, best_ratio, steps, %hex, "contrast search reached a fixed point");
                return Err(ColorError::ContrastUnreachable {
                    min_ratio,
                    best_ratio,
                    steps,
                    last_hex: hex,
                });
            }

            let ratio = self.contrast_ratio(&candidate);
            best_ratio = best_ratio.max(ratio);
            trace!(steps, %hex, ratio, "contrast search step");

            if ratio >= min_ratio {
                debug!(min_ratio, ratio, steps, %hex, "contrast search satisfied");
                return Ok(candidate);
            }

            if config.max_steps.is_some_and(|max| steps >= max) {
                debug!(min_ratio, best_ratio, steps, "contrast search hit step limit");
                return Err(ColorError::ContrastUnreachable {
                    min_ratio,
                    best_ratio,
                    steps,
                    last_hex: hex,
                });
            }

            previous_hex = Some(hex);
        }
    }

    pub fn hex(&self) -> String {
        self.color.hex()
    }

    pub fn hexa(&self) -> String {
        self.color.hexa()
    }

    pub fn rgb_string(&self) -> String {
        self.color.rgb_string()
    }

    pub fn alpha(&self) -> f64 {
        self.color.alpha()
    }

    /// Same color at a different opacity.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::new(self.color.with_alpha(alpha))
    }

    /// Gray of matching projected brightness.
    pub fn grayscale(&self) -> Self {
        let gray = self.color.grayscale();
        Self::new(Rgba::from_unit(gray, gray, gray, self.color.alpha()))
    }

    /// Composite this color over `background`, dropping translucency.
    pub fn flatten_over(&self, background: &ExtendedColor) -> Self {
        Self::new(composite_over(self.color, background.color))
    }

    /// Rendered 0-255 channels.
    pub fn channels(&self) -> [u8; 3] {
        self.color.to_rgb8()
    }
}

impl fmt::Display for ExtendedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for ExtendedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        make_color(s)
    }
}

impl Serialize for ExtendedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ColorValue::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::color_parse::ChannelRecord;

    fn color(s: &str) -> ExtendedColor {
        make_color(s).unwrap()
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#1e293b", "#8bb3ff", "#000000", "#ffffff", "#192546"] {
            assert_eq!(color(hex).hex(), hex);
        }
        assert_eq!(color("#8BB3FF").hex(), "#8bb3ff");
    }

    #[test]
    fn accepts_every_param_shape() {
        let expected = color("#1e293b");
        assert_eq!(make_color([30u8, 41, 59]).unwrap(), expected);
        assert_eq!(make_color(vec![30.0, 41.0, 59.0]).unwrap(), expected);
        let record = ChannelRecord {
            r: Some(30.0),
            g: Some(41.0),
            b: Some(59.0),
            ..ChannelRecord::default()
        };
        assert_eq!(make_color(record).unwrap(), expected);
        assert_eq!(make_color(expected).unwrap(), expected);
        assert_eq!(make_color(expected.rgba()).unwrap(), expected);
    }

    #[test]
    fn constructor_errors() {
        assert!(make_color(vec![1.0, 2.0]).unwrap_err().to_string().contains("too few"));
        assert!(make_color(vec![1.0, 2.0, 3.0, 4.0]).unwrap_err().to_string().contains("too many"));
        let record = ChannelRecord {
            r: Some(1.0),
            g: Some(2.0),
            ..ChannelRecord::default()
        };
        assert!(make_color(record).unwrap_err().to_string().contains("invalid parameter"));
    }

    #[test]
    fn zero_move_is_identity() {
        let c = color("#4a7f2c").with_alpha(0.7);
        assert_eq!(c.move_to("#ffffff", 0.0, false).unwrap(), c);
        assert_eq!(c.move_to("#ffffff", 0.0, true).unwrap(), c);
    }

    #[test]
    fn approach_lands_strictly_between() {
        let src = color("#204060");
        let target = color("#e0c010");
        let out = src.approach(target, 0.5).unwrap();
        let channels = src
            .rgba()
            .unit_array()
            .into_iter()
            .zip(target.rgba().unit_array())
            .zip(out.rgba().unit_array());
        for ((s, t), o) in channels {
            if s != t {
                assert!(o > s.min(t) && o < s.max(t), "{o} not between {s} and {t}");
            }
        }
    }

    #[test]
    fn depart_moves_away() {
        let src = color("#606060");
        let out = src.depart("#808080", 0.5).unwrap();
        // 96 + (128 - 96) * -0.5 = 80
        assert_eq!(out.hex(), "#505050");
    }

    #[test]
    fn pull_converges_on_mean_luminance() {
        let mean_lum = ExtendedColor::new(GLOBAL_MEAN).luminance();
        for hex in ["#ffffff", "#f0d060", "#203080"] {
            let src = color(hex);
            let near = src.pull(0.1, None).unwrap().luminance();
            let nearer = src.pull(0.3, None).unwrap().luminance();
            assert!((nearer - mean_lum).abs() < (near - mean_lum).abs(), "{hex}");
            assert!((near - mean_lum).abs() < (src.luminance() - mean_lum).abs(), "{hex}");
        }
    }

    #[test]
    fn pull_narrows_every_channel_of_chromatic_color() {
        let src = color("#e03050");
        let mean = GLOBAL_MEAN.unit_array();
        let distances = |c: ExtendedColor| {
            let unit = c.rgba().unit_array();
            [0, 1, 2].map(|i| (unit[i] - mean[i]).abs())
        };
        let start = distances(src);
        let near = distances(src.pull(0.1, None).unwrap());
        let nearer = distances(src.pull(0.3, None).unwrap());
        for i in 0..3 {
            assert!(near[i] < start[i]);
            assert!(nearer[i] < near[i]);
        }
        // hue is kept: red stays the dominant channel
        let [r, g, b] = src.pull(0.3, None).unwrap().channels();
        assert!(r > g && r > b);
    }

    #[test]
    fn push_moves_away_from_mean() {
        let c = color("#a0a0a0");
        let pushed = c.push(0.5, None).unwrap();
        assert!(pushed.luminance() > c.luminance());
        let pulled = c.pull(0.5, None).unwrap();
        assert!(pulled.luminance() < c.luminance());
    }

    #[test]
    fn pull_toward_custom_mean() {
        let c = color("#ffffff");
        let out = c.pull(0.5, Some("#000000".into())).unwrap();
        assert_eq!(out.hex(), "#808080");
        assert!(c.pull(0.5, Some(vec![1.0].into())).is_err());
    }

    #[test]
    fn contrast_ratio_with_self_is_one() {
        for hex in ["#000000", "#ffffff", "#192546", "#8bb3ff"] {
            let c = color(hex);
            assert_eq!(c.contrast_ratio(&c), 1.0);
        }
    }

    #[test]
    fn contrast_ratio_is_directed() {
        let white = color("#ffffff");
        let black = color("#000000");
        assert!(white.contrast_ratio(&black) > 20.0);
        assert!(black.contrast_ratio(&white) < 0.05);
        assert!((white.wcag_ratio(&black) - black.wcag_ratio(&white)).abs() < 1e-12);
    }

    #[test]
    fn contrast_of_one_takes_single_step() {
        let white = color("#ffffff");
        let out = white.contrast(1.0).unwrap();
        assert_eq!(out, white.pull(0.01, None).unwrap());
        assert_eq!(out.hex(), "#fefefe");

        let gray = ExtendedColor::new(GLOBAL_MEAN);
        assert_eq!(gray.contrast(1.0).unwrap().hex(), "#808080");
    }

    #[test]
    fn contrast_search_reaches_modest_ratio() {
        let white = color("#ffffff");
        let out = white.contrast(1.2).unwrap();
        assert!(white.contrast_ratio(&out) >= 1.2);
        assert!(out.luminance() < white.luminance());
    }

    #[test]
    fn contrast_toward_black_reaches_legibility() {
        let light = color("#eeeeee");
        let out = light.contrast_toward(4.5, "#000000").unwrap();
        assert!(light.contrast_ratio(&out) >= 4.5);
        assert!(out.luminance() < light.luminance());
        // still a neutral gray: only pulled, never shifted in hue
        let [r, g, b] = out.channels();
        assert!(r == g && g == b);
    }

    #[test]
    fn contrast_unreachable_against_gray_mean() {
        let err = color("#ffffff").contrast(4.5).unwrap_err();
        match err {
            ColorError::ContrastUnreachable { min_ratio, best_ratio, .. } => {
                assert_eq!(min_ratio, 4.5);
                assert!(best_ratio < 4.5);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn darker_than_mean_never_satisfies_directed_ratio() {
        assert!(color("#000000").contrast(1.5).is_err());
    }

    #[test]
    fn step_limit_stops_search() {
        let config = SearchConfig {
            max_steps: Some(3),
            ..SearchConfig::toward(Rgba::BLACK)
        };
        let err = color("#ffffff").contrast_with(4.5, &config).unwrap_err();
        assert!(matches!(err, ColorError::ContrastUnreachable { steps: 3, .. }));
    }

    #[test]
    fn overshooting_step_is_rejected() {
        for step in [2.0, 1.5, 0.0, -0.1, f64::NAN, f64::INFINITY] {
            let config = SearchConfig {
                step,
                ..SearchConfig::default()
            };
            let err = color("#ffffff").contrast_with(25.0, &config).unwrap_err();
            assert!(matches!(err, ColorError::InvalidStep { .. }), "step {step}");
        }
    }

    #[test]
    fn full_step_lands_on_mean_then_stops() {
        let config = SearchConfig {
            step: 1.0,
            ..SearchConfig::default()
        };
        let err = color("#ffffff").contrast_with(25.0, &config).unwrap_err();
        assert!(matches!(err, ColorError::ContrastUnreachable { steps: 2, .. }));
    }

    #[test]
    fn value_helpers() {
        let c = color("#ff0000").with_alpha(0.5);
        assert_eq!(c.hexa(), "#ff000080");
        assert_eq!(c.rgb_string(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(c.flatten_over(&color("#0000ff")).hex(), "#800080");
        assert_eq!(color("#ffffff").grayscale().hex(), "#ffffff");
        assert_eq!(format!("{}", color("red")), "#ff0000");
        assert_eq!("#00ff00".parse::<ExtendedColor>().unwrap().channels(), [0, 255, 0]);
    }

    #[test]
    fn serializes_as_color_value() {
        let json = serde_json::to_value(color("#1e293b")).unwrap();
        assert_eq!(json["hex"], "#1e293b");
        assert_eq!(json["r"], 30);
        assert_eq!(json["alpha"], 1.0);
    }
}
