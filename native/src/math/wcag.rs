use super::rgba::Rgba;

/// Gamma-expand one channel given on the 0-255 scale.
/// Linear segment up to 10: c / 3294, otherwise ((c / 269) + 0.0513)^2.4.
/// These are the sRGB constants (12.92, 1.055, 0.055) folded into the 0-255 scale.
fn expand_channel(c: f64) -> f64 {
    if c <= 10.0 {
        c / 3294.0
    } else {
        (c / 269.0 + 0.0513).powf(2.4)
    }
}

/// Relative luminance: 0.2126 R + 0.7152 G + 0.0722 B over expanded channels.
pub fn relative_luminance(color: &Rgba) -> f64 {
    let [r, g, b] = color.scaled();
    0.2126 * expand_channel(r) + 0.7152 * expand_channel(g) + 0.0722 * expand_channel(b)
}

/// Directed ratio (L1 + 0.05) / (L2 + 0.05). Below 1 when `l1` is the darker side.
pub fn directed_ratio(l1: f64, l2: f64) -> f64 {
    (l1 + 0.05) / (l2 + 0.05)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: &Rgba, b: &Rgba) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    directed_ratio(lighter, darker)
}

/// AA minimum for large text, and for non-text elements.
const AA_LARGE: f64 = 3.0;
/// AA minimum for body text; doubles as the AAA minimum for large text.
const AA_BODY: f64 = 4.5;
const AAA_BODY: f64 = 7.0;

/// Pass/fail of a symmetric ratio against every WCAG 2.x level.
/// `pass_aa`/`pass_aaa` follow the text size; the `_large` flags always use
/// the large-text minimums.
pub fn check_wcag_thresholds(ratio: f64, is_large_text: bool) -> WcagResult {
    let (aa, aaa) = if is_large_text {
        (AA_LARGE, AA_BODY)
    } else {
        (AA_BODY, AAA_BODY)
    };
    WcagResult {
        pass_aa: ratio >= aa,
        pass_aa_large: ratio >= AA_LARGE,
        pass_aaa: ratio >= aaa,
        pass_aaa_large: ratio >= AA_BODY,
    }
}

/// Verdict surfaced per swatch by the palette resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}
