use super::rgba::Rgba;

/// Alpha-composite a foreground color over a background color.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
/// The result carries the background's alpha.
pub fn composite_over(fg: Rgba, bg: Rgba) -> Rgba {
    let alpha = fg.alpha();
    let blend = |f: f64, b: f64| f * alpha + b * (1.0 - alpha);

    Rgba::from_unit(
        blend(fg.red(), bg.red()),
        blend(fg.green(), bg.green()),
        blend(fg.blue(), bg.blue()),
        bg.alpha(),
    )
}
