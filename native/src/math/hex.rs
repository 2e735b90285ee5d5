/// Format RGB bytes as a 6-digit lowercase hex string.
pub fn format_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Format RGB bytes plus an alpha byte as an 8-digit hex string.
pub fn format_hexa([r, g, b]: [u8; 3], a: u8) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}
