//! Color tokens: hex parsing and blending
//!
//! Variant color tokens and section backgrounds are authored as CSS hex
//! strings (`#RRGGBB`). They are parsed once into [`Rgba`] and blended in
//! normalized f32 space, because per-frame background fades move by less
//! than one 8-bit step per frame and would stall if rounded to `u8`.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };

    /// Convert to normalized f32 (for blending)
    #[inline(always)]
    pub fn to_f32(self) -> [f32; 4] {
        const INV_255: f32 = 1.0 / 255.0;
        [
            self.r as f32 * INV_255,
            self.g as f32 * INV_255,
            self.b as f32 * INV_255,
            self.a as f32 * INV_255,
        ]
    }

    /// Quantize a normalized color back to 8-bit channels.
    pub fn from_f32(c: [f32; 4]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r: q(c[0]), g: q(c[1]), b: q(c[2]), a: q(c[3]) }
    }

    /// `#rrggbb` form, alpha dropped when opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Component-wise linear blend of two normalized colors.
#[inline]
pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        (b[0] - a[0]).mul_add(t, a[0]),
        (b[1] - a[1]).mul_add(t, a[1]),
        (b[2] - a[2]).mul_add(t, a[2]),
        (b[3] - a[3]).mul_add(t, a[3]),
    ]
}

/// Hex character → 4-bit value without branching.
///
/// Exactly one of the three range flags is 1 for a valid digit; all three
/// are 0 for anything else, which yields 0.
#[inline(always)]
fn hex_digit(b: u8) -> u8 {
    let is_digit = (b.wrapping_sub(b'0') < 10) as u8;
    let is_lower = (b.wrapping_sub(b'a') < 6) as u8;
    let is_upper = (b.wrapping_sub(b'A') < 6) as u8;

    is_digit
        .wrapping_mul(b.wrapping_sub(b'0'))
        .wrapping_add(is_lower.wrapping_mul(b.wrapping_sub(b'a').wrapping_add(10)))
        .wrapping_add(is_upper.wrapping_mul(b.wrapping_sub(b'A').wrapping_add(10)))
}

#[inline(always)]
fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline(always)]
fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_digit(hi) << 4) | hex_digit(lo)
}

/// Parse a hex color token, rejecting malformed input.
///
/// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`.
pub fn try_parse_hex(s: &str) -> Option<Rgba> {
    let bytes = s.trim().as_bytes();
    if bytes.first() != Some(&b'#') || !bytes[1..].iter().all(|&b| is_hex_digit(b)) {
        return None;
    }

    match bytes.len() {
        4 => {
            let r = hex_digit(bytes[1]);
            let g = hex_digit(bytes[2]);
            let b = hex_digit(bytes[3]);
            Some(Rgba { r: r << 4 | r, g: g << 4 | g, b: b << 4 | b, a: 255 })
        }
        7 => Some(Rgba {
            r: hex_byte(bytes[1], bytes[2]),
            g: hex_byte(bytes[3], bytes[4]),
            b: hex_byte(bytes[5], bytes[6]),
            a: 255,
        }),
        9 => Some(Rgba {
            r: hex_byte(bytes[1], bytes[2]),
            g: hex_byte(bytes[3], bytes[4]),
            b: hex_byte(bytes[5], bytes[6]),
            a: hex_byte(bytes[7], bytes[8]),
        }),
        _ => None,
    }
}

/// Parse a hex color token, falling back to black on invalid input.
pub fn parse_hex_color(s: &str) -> Rgba {
    try_parse_hex(s).unwrap_or(Rgba::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit() {
        assert_eq!(hex_digit(b'0'), 0);
        assert_eq!(hex_digit(b'9'), 9);
        assert_eq!(hex_digit(b'a'), 10);
        assert_eq!(hex_digit(b'F'), 15);
    }

    #[test]
    fn test_parse_variant_tokens() {
        assert_eq!(parse_hex_color("#2c0412"), Rgba { r: 0x2c, g: 0x04, b: 0x12, a: 255 });
        assert_eq!(parse_hex_color("#F80"), Rgba { r: 255, g: 136, b: 0, a: 255 });
        assert_eq!(parse_hex_color("#FF880080").a, 128);
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(try_parse_hex("2c0412"), None);
        assert_eq!(try_parse_hex("#2c04"), None);
        assert_eq!(try_parse_hex("#zz0412"), None);
        assert_eq!(parse_hex_color("nope"), Rgba::BLACK);
    }

    #[test]
    fn test_round_trip_hex() {
        assert_eq!(parse_hex_color("#4a4e69").to_hex(), "#4a4e69");
    }

    #[test]
    fn test_mix_midpoint() {
        let m = mix(Rgba::BLACK.to_f32(), Rgba::WHITE.to_f32(), 0.5);
        assert_eq!(Rgba::from_f32(m), Rgba { r: 128, g: 128, b: 128, a: 255 });
    }
}
