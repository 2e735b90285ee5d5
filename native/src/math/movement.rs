use super::rgba::Rgba;

/// Compensation for a proportional step toward a fixed mean shrinking as the
/// source sits further from mid gray: 1 at 0.5 gray, 0 at black or white.
pub fn absolute_adjustment(source: &Rgba) -> f64 {
    let mean_proximity = (source.grayscale() - 0.5).abs();
    (0.5 - mean_proximity) / 0.5
}

/// One channel step. Takes whichever of the raw and adjusted deltas moves
/// further in the direction of travel.
fn step_channel(src: f64, tgt: f64, amount: f64, adjustment: f64) -> f64 {
    let target_proximity = tgt - src;
    let delta = target_proximity * amount;
    let adjusted = target_proximity * amount * adjustment;
    let effective = if delta > 0.0 {
        delta.max(adjusted)
    } else {
        delta.min(adjusted)
    };
    src + effective
}

/// Move every channel of `source` by `amount` of its distance to `target`.
/// Negative amounts move away. With `absolute`, the step is compensated by
/// [`absolute_adjustment`] with the same factor on every channel, so hue
/// does not shift.
pub fn move_channels(source: &Rgba, target: &Rgba, amount: f64, absolute: bool) -> Rgba {
    let adjustment = if absolute {
        absolute_adjustment(source)
    } else {
        1.0
    };

    let [sr, sg, sb, sa] = source.unit_array();
    let [tr, tg, tb, ta] = target.unit_array();

    Rgba::from_unit(
        step_channel(sr, tr, amount, adjustment),
        step_channel(sg, tg, amount, adjustment),
        step_channel(sb, tb, amount, adjustment),
        step_channel(sa, ta, amount, adjustment),
    )
}
