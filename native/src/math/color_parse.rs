use csscolorparser::Color;
use serde::Deserialize;
use serde_json::Value;

use super::rgba::Rgba;
use crate::color::ExtendedColor;
use crate::error::{ColorError, LengthMismatch, Result};

/// Record-shaped color input. A `hex` field marks the record as already
/// canonical; otherwise all of `r`, `g`, `b` (0-255) must be present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChannelRecord {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    #[serde(default, alias = "a")]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub hex: Option<String>,
}

/// Every input shape a color parameter may take.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorParam {
    /// Hex code, named color or any CSS color function.
    Text(String),
    /// `[r, g, b]` on the 0-255 scale.
    Channels(Vec<f64>),
    Record(ChannelRecord),
    Canonical(Rgba),
    Extended(ExtendedColor),
}

impl ColorParam {
    /// Classify a JSON value coming across the JS boundary.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(ColorParam::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64().ok_or_else(|| ColorError::InvalidParameterType {
                        got: format!("array containing {}", json_type(item)),
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(ColorParam::Channels),
            Value::Object(_) => ChannelRecord::deserialize(value)
                .map(ColorParam::Record)
                .map_err(|e| ColorError::UnparseableColor {
                    input: value.to_string(),
                    reason: e.to_string(),
                }),
            other => Err(ColorError::InvalidParameterType {
                got: json_type(other).to_string(),
            }),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalize any color parameter into the canonical representation.
pub fn normalize(param: ColorParam) -> Result<Rgba> {
    match param {
        ColorParam::Text(s) => parse_css(&s),
        ColorParam::Channels(channels) => from_channels(&channels),
        ColorParam::Record(record) => from_record(&record),
        ColorParam::Canonical(rgba) => Ok(rgba),
        ColorParam::Extended(color) => Ok(color.rgba()),
    }
}

fn parse_css(value: &str) -> Result<Rgba> {
    let trimmed = value.trim();
    let color = trimmed
        .parse::<Color>()
        .map_err(|e| ColorError::UnparseableColor {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(Rgba::from_rgb8(r as f64, g as f64, b as f64, f64::from(color.a)))
}

fn from_channels(channels: &[f64]) -> Result<Rgba> {
    match *channels {
        [r, g, b] => Ok(Rgba::from_rgb8(r, g, b, 1.0)),
        _ => Err(ColorError::InvalidArrayLength {
            len: channels.len(),
            kind: if channels.len() < 3 {
                LengthMismatch::TooFew
            } else {
                LengthMismatch::TooMany
            },
        }),
    }
}

fn from_record(record: &ChannelRecord) -> Result<Rgba> {
    if let Some(hex) = &record.hex {
        let parsed = parse_css(hex)?;
        return Ok(match record.alpha {
            Some(alpha) => parsed.with_alpha(alpha),
            None => parsed,
        });
    }

    match (record.r, record.g, record.b) {
        (Some(r), Some(g), Some(b)) => Ok(Rgba::from_rgb8(r, g, b, record.alpha.unwrap_or(1.0))),
        _ => {
            let missing = [("r", record.r), ("g", record.g), ("b", record.b)]
                .into_iter()
                .filter(|(_, v)| v.is_none())
                .map(|(name, _)| name)
                .collect();
            Err(ColorError::InvalidRecordShape { missing })
        }
    }
}

impl From<&str> for ColorParam {
    fn from(value: &str) -> Self {
        ColorParam::Text(value.to_string())
    }
}

impl From<String> for ColorParam {
    fn from(value: String) -> Self {
        ColorParam::Text(value)
    }
}

impl From<[u8; 3]> for ColorParam {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColorParam::Channels(vec![r as f64, g as f64, b as f64])
    }
}

impl From<Vec<f64>> for ColorParam {
    fn from(value: Vec<f64>) -> Self {
        ColorParam::Channels(value)
    }
}

impl From<ChannelRecord> for ColorParam {
    fn from(value: ChannelRecord) -> Self {
        ColorParam::Record(value)
    }
}

impl From<Rgba> for ColorParam {
    fn from(value: Rgba) -> Self {
        ColorParam::Canonical(value)
    }
}

impl From<ExtendedColor> for ColorParam {
    fn from(value: ExtendedColor) -> Self {
        ColorParam::Extended(value)
    }
}

impl From<&ExtendedColor> for ColorParam {
    fn from(value: &ExtendedColor) -> Self {
        ColorParam::Extended(*value)
    }
}
