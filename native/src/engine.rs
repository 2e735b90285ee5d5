use rayon::prelude::*;
use tracing::debug;

use crate::color::ExtendedColor;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::math::color_parse::{normalize, ColorParam};
use crate::types::{PaletteRequest, ResolvedSwatch, SwatchInput};

/// Shift and contrast-search every swatch of a palette in parallel.
///
/// Uses Rayon's `par_iter()`; every swatch is an independent pure computation.
/// Output order matches input order. Per-swatch failures land in
/// `ResolvedSwatch::error`; only an invalid shared `mean` or `step` fails the
/// whole call.
pub fn resolve_palette(request: &PaletteRequest) -> Result<Vec<ResolvedSwatch>> {
    let config = search_config(request)?;
    let large_text = request.large_text.unwrap_or(false);

    debug!(swatches = request.swatches.len(), step = config.step, "resolving palette");

    Ok(request
        .swatches
        .par_iter()
        .map(|swatch| resolve_swatch(swatch, &config, large_text))
        .collect())
}

fn search_config(request: &PaletteRequest) -> Result<SearchConfig> {
    let mut config = SearchConfig::default();
    if let Some(mean) = &request.mean {
        config.mean = normalize(ColorParam::from_json(mean)?)?;
    }
    if let Some(step) = request.step {
        config.step = step;
    }
    config.max_steps = request.max_steps.map(|n| n as usize);
    config.validate()?;
    Ok(config)
}

fn resolve_swatch(swatch: &SwatchInput, config: &SearchConfig, large_text: bool) -> ResolvedSwatch {
    let mut resolved = ResolvedSwatch {
        name: swatch.name.clone(),
        ..ResolvedSwatch::default()
    };

    let base = match ColorParam::from_json(&swatch.color)
        .and_then(normalize)
        .map(ExtendedColor::new)
    {
        Ok(color) => color,
        Err(err) => {
            resolved.error = Some(err.to_string());
            return resolved;
        }
    };
    resolved.base_hex = Some(base.hex());

    let shifted = match swatch.shift {
        Some(amount) => base.revert_to(amount, &config.mean),
        None => base,
    };
    resolved.shifted_hex = Some(shifted.hex());

    if let Some(min_ratio) = swatch.min_contrast {
        match shifted.contrast_with(min_ratio, config) {
            Ok(legible) => record_legible(&mut resolved, &shifted, &legible, large_text),
            Err(err) => resolved.error = Some(err.to_string()),
        }
    }

    resolved
}

fn record_legible(
    resolved: &mut ResolvedSwatch,
    shifted: &ExtendedColor,
    legible: &ExtendedColor,
    large_text: bool,
) {
    let ratio = shifted.contrast_ratio(legible);
    let wcag = shifted.wcag(legible, large_text);
    resolved.legible_hex = Some(legible.hex());
    resolved.ratio = Some((ratio * 100.0).round() / 100.0);
    resolved.pass_aa = Some(wcag.pass_aa);
    resolved.pass_aa_large = Some(wcag.pass_aa_large);
    resolved.pass_aaa = Some(wcag.pass_aaa);
    resolved.pass_aaa_large = Some(wcag.pass_aaa_large);
}
