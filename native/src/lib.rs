#[macro_use]
extern crate napi_derive;

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod types;

use serde_json::Value;

use crate::color::ExtendedColor;
use crate::math::color_parse::{normalize, ColorParam};
use crate::types::{ColorValue, PaletteRequest, ResolvedSwatch};

fn color_arg(value: &Value) -> error::Result<ExtendedColor> {
    normalize(ColorParam::from_json(value)?).map(ExtendedColor::new)
}

fn mean_arg(mean: Option<&Value>) -> error::Result<Option<ColorParam>> {
    mean.map(ColorParam::from_json).transpose()
}

#[napi]
pub fn health_check() -> String {
    "chromatophore-native ok".to_string()
}

/// Normalize any color parameter. The returned value is itself a valid parameter.
#[napi]
pub fn make_color(param: Value) -> napi::Result<ColorValue> {
    Ok(color_arg(&param)?.into())
}

#[napi]
pub fn approach(color: Value, target: Value, amount: f64) -> napi::Result<ColorValue> {
    let target = ColorParam::from_json(&target)?;
    Ok(color_arg(&color)?.approach(target, amount)?.into())
}

#[napi]
pub fn depart(color: Value, target: Value, amount: f64) -> napi::Result<ColorValue> {
    let target = ColorParam::from_json(&target)?;
    Ok(color_arg(&color)?.depart(target, amount)?.into())
}

#[napi]
pub fn move_to(
    color: Value,
    target: Value,
    amount: f64,
    absolute: Option<bool>,
) -> napi::Result<ColorValue> {
    let target = ColorParam::from_json(&target)?;
    let moved = color_arg(&color)?.move_to(target, amount, absolute.unwrap_or(false))?;
    Ok(moved.into())
}

#[napi]
pub fn pull(color: Value, amount: f64, mean: Option<Value>) -> napi::Result<ColorValue> {
    let mean = mean_arg(mean.as_ref())?;
    Ok(color_arg(&color)?.pull(amount, mean)?.into())
}

#[napi]
pub fn push(color: Value, amount: f64, mean: Option<Value>) -> napi::Result<ColorValue> {
    let mean = mean_arg(mean.as_ref())?;
    Ok(color_arg(&color)?.push(amount, mean)?.into())
}

#[napi]
pub fn revert(color: Value, amount: f64, mean: Option<Value>) -> napi::Result<ColorValue> {
    let mean = mean_arg(mean.as_ref())?;
    Ok(color_arg(&color)?.revert(amount, mean)?.into())
}

#[napi]
pub fn luminance(color: Value) -> napi::Result<f64> {
    Ok(color_arg(&color)?.luminance())
}

/// Directed ratio of `color` over `other`.
#[napi]
pub fn contrast_ratio(color: Value, other: Value) -> napi::Result<f64> {
    Ok(color_arg(&color)?.contrast_ratio(&color_arg(&other)?))
}

#[napi]
pub fn wcag_ratio(color: Value, other: Value) -> napi::Result<f64> {
    Ok(color_arg(&color)?.wcag_ratio(&color_arg(&other)?))
}

/// Pull `color` toward `mean` (default `#808080`) until it contrasts by `minRatio`.
#[napi]
pub fn contrast(color: Value, min_ratio: f64, mean: Option<Value>) -> napi::Result<ColorValue> {
    let color = color_arg(&color)?;
    let found = match mean_arg(mean.as_ref())? {
        Some(mean) => color.contrast_toward(min_ratio, mean)?,
        None => color.contrast(min_ratio)?,
    };
    Ok(found.into())
}

#[napi]
pub fn hex(color: Value) -> napi::Result<String> {
    Ok(color_arg(&color)?.hex())
}

/// Main batch entry point called from JS.
#[napi]
pub fn resolve_palette(request: PaletteRequest) -> napi::Result<Vec<ResolvedSwatch>> {
    Ok(engine::resolve_palette(&request)?)
}
