use napi_derive::napi;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::ExtendedColor;

/// Plain snapshot of a color handed back to JS.
/// Carries `hex`, so it is accepted again wherever a color is expected.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub hex: String,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub alpha: f64,
}

impl From<&ExtendedColor> for ColorValue {
    fn from(color: &ExtendedColor) -> Self {
        let [r, g, b] = color.channels();
        ColorValue {
            hex: color.hex(),
            r: r as u32,
            g: g as u32,
            b: b as u32,
            alpha: color.alpha(),
        }
    }
}

impl From<ExtendedColor> for ColorValue {
    fn from(color: ExtendedColor) -> Self {
        ColorValue::from(&color)
    }
}

/// One named color to resolve.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchInput {
    pub name: String,
    /// Any color parameter: string, `[r, g, b]`, `{ r, g, b }` or a `ColorValue`.
    pub color: Value,
    /// Positive pulls toward the mean, negative pushes away.
    #[serde(default)]
    pub shift: Option<f64>,
    /// Run a contrast search from the shifted color when set.
    #[serde(default)]
    pub min_contrast: Option<f64>,
}

/// Configuration passed from JS to Rust
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRequest {
    pub swatches: Vec<SwatchInput>,
    /// Mean for shifts and contrast searches. Defaults to `#808080`.
    #[serde(default)]
    pub mean: Option<Value>,
    /// Pull step of the contrast search. Defaults to 0.01.
    #[serde(default)]
    pub step: Option<f64>,
    #[serde(default)]
    pub max_steps: Option<u32>,
    /// Judge the WCAG verdict with large-text thresholds.
    #[serde(default)]
    pub large_text: Option<bool>,
}

/// Result for one swatch, in request order.
#[napi(object)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSwatch {
    pub name: String,
    pub base_hex: Option<String>,
    pub shifted_hex: Option<String>,
    pub legible_hex: Option<String>,
    /// Directed ratio of the shifted color over the legible one.
    pub ratio: Option<f64>,
    pub pass_aa: Option<bool>,
    pub pass_aa_large: Option<bool>,
    pub pass_aaa: Option<bool>,
    pub pass_aaa_large: Option<bool>,
    pub error: Option<String>,
}
