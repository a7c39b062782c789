/// Parse `#rrggbb` (or `#rgb`) into sRGB components in \[0, 1\].
pub fn parse_hex_rgb(s: &str) -> Option<[f32; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            parse_hex_rgb(&format!("#{doubled}"))
        }
        _ => None,
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Hex string to linear RGB, ready for an sRGB render target.
pub fn hex_to_linear_rgb(s: &str) -> Option<[f32; 3]> {
    parse_hex_rgb(s).map(|rgb| rgb.map(srgb_to_linear))
}
