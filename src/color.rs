use palette::{FromColor, Hsl, RgbHue, Srgb};

/// An sRGB color with an alpha component, stored as `u8` channels.
///
/// All palette derivation runs on 0–255 integer channels so that the
/// generated hex values are bit-exact across runs; HSL-based operations
/// round-trip through [`palette`] at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a 3- or 6-digit hex color with a leading `#`.
    ///
    /// Anything else (named colors, missing `#`, odd lengths) is rejected,
    /// matching the input contract of the generation step.
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let channel = |i: usize| {
                    let d = u8::from_str_radix(&digits[i..i + 1], 16).ok()?;
                    Some(d << 4 | d)
                };
                Some(Self::from_rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Formats as a lowercase 6-digit hex string (`#rrggbb`).
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats as a lowercase 8-digit hex string (`#rrggbbaa`).
    pub fn hex8(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Weighted RGB blend toward `other`.
    ///
    /// `amount` is the percentage contributed by `other`: 0 returns `self`
    /// unchanged, 100 returns `other` exactly. Channels round to the
    /// nearest integer.
    pub fn mix(self, other: Color, amount: u8) -> Color {
        let p = f64::from(amount.min(100)) / 100.0;
        let channel = |a: u8, b: u8| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * p).round() as u8
        };
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: channel(self.a, other.a),
        }
    }

    /// Component-wise multiply blend: `floor(a * b / 255)` per channel.
    ///
    /// Multiplying a color by itself yields the darkened variant used as
    /// the endpoint for the high-numbered tonal stops. The floor division
    /// is part of the output contract; keep it integer math.
    pub fn multiply(self, other: Color) -> Color {
        let channel = |a: u8, b: u8| ((u16::from(a) * u16::from(b)) / 255) as u8;
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a,
        }
    }

    /// The four hues spaced 90° apart on the hue wheel, starting at this
    /// color's hue. Saturation and lightness are preserved.
    pub fn tetrad(self) -> [Color; 4] {
        let hsl = self.to_hsl();
        let base = hsl.hue.into_positive_degrees();
        [0.0f32, 90.0, 180.0, 270.0].map(|offset| {
            let hue = RgbHue::from_degrees((base + offset) % 360.0);
            Self::from_hsl(
                Hsl::from_components((hue, hsl.saturation, hsl.lightness)),
                self.a,
            )
        })
    }

    /// Sets the HSL saturation channel to an absolute percentage (0–100).
    pub fn saturate_to(self, amount: u8) -> Color {
        let hsl = self.to_hsl();
        let saturation = f32::from(amount.min(100)) / 100.0;
        Self::from_hsl(
            Hsl::from_components((hsl.hue, saturation, hsl.lightness)),
            self.a,
        )
    }

    /// Sets the HSL lightness channel to an absolute percentage (0–100).
    pub fn lighten_to(self, amount: u8) -> Color {
        let hsl = self.to_hsl();
        let lightness = f32::from(amount.min(100)) / 100.0;
        Self::from_hsl(
            Hsl::from_components((hsl.hue, hsl.saturation, lightness)),
            self.a,
        )
    }

    /// Perceived brightness on the 0–255 YIQ scale.
    pub fn brightness(self) -> f64 {
        (299.0 * f64::from(self.r) + 587.0 * f64::from(self.g) + 114.0 * f64::from(self.b))
            / 1000.0
    }

    /// Whether the color reads as light, i.e. dark text stays legible on it.
    pub fn is_light(self) -> bool {
        self.brightness() >= 128.0
    }

    fn to_hsl(self) -> Hsl {
        Hsl::from_color(Srgb::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ))
    }

    fn from_hsl(hsl: Hsl, alpha: u8) -> Color {
        let rgb = Srgb::from_color(hsl);
        Color {
            r: (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            a: alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        let color = Color::from_hex("#3f51b5").unwrap();
        assert_eq!(color, Color::from_rgb(0x3f, 0x51, 0xb5));
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_from_hex_three_digits() {
        // #f80 expands to #ff8800
        let color = Color::from_hex("#f80").unwrap();
        assert_eq!(color, Color::from_rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_from_hex_rejects_invalid() {
        assert!(Color::from_hex("red").is_none());
        assert!(Color::from_hex("3f51b5").is_none());
        assert!(Color::from_hex("#3f51b").is_none());
        assert!(Color::from_hex("#3f51b5a").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn test_hex_formatting() {
        let color = Color::from_rgb(0x3f, 0x51, 0xb5);
        assert_eq!(color.hex(), "#3f51b5");
        assert_eq!(color.hex8(), "#3f51b5ff");
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::from_rgb(10, 20, 30);
        let b = Color::from_rgb(200, 100, 50);
        assert_eq!(a.mix(b, 0), a);
        assert_eq!(a.mix(b, 100), b);
    }

    #[test]
    fn test_mix_is_weighted_toward_other() {
        // 12% toward white keeps the result close to the seed
        let seed = Color::from_rgb(0x3f, 0x51, 0xb5);
        let mixed = seed.mix(Color::WHITE, 12);
        assert_eq!(mixed, Color::from_rgb(86, 102, 190));
    }

    #[test]
    fn test_multiply_uses_floor_division() {
        let seed = Color::from_rgb(0x3f, 0x51, 0xb5);
        let dark = seed.multiply(seed);
        // 63*63/255 = 15.56 -> 15, 81*81/255 = 25.7 -> 25, 181*181/255 = 128.4 -> 128
        assert_eq!(dark, Color::from_rgb(15, 25, 128));
    }

    #[test]
    fn test_tetrad_spacing() {
        let seed = Color::from_rgb(255, 0, 0);
        let tetrad = seed.tetrad();
        assert_eq!(tetrad[0], seed);
        // red (hue 0) rotated 90/180/270 degrees at full saturation
        assert_eq!(tetrad[1], Color::from_rgb(128, 255, 0));
        assert_eq!(tetrad[2], Color::from_rgb(0, 255, 255));
        assert_eq!(tetrad[3], Color::from_rgb(128, 0, 255));
    }

    #[test]
    fn test_saturate_and_lighten_are_absolute() {
        let color = Color::from_rgb(0x3f, 0x51, 0xb5).saturate_to(100).lighten_to(50);
        // full saturation at 50% lightness leaves a pure hue
        assert_eq!(color, Color::from_rgb(0, 39, 255));
    }

    #[test]
    fn test_adjustments_clamp_out_of_range() {
        let color = Color::from_rgb(0x3f, 0x51, 0xb5);
        assert_eq!(color.saturate_to(200), color.saturate_to(100));
        assert_eq!(color.lighten_to(200), Color::WHITE);
    }

    #[test]
    fn test_brightness_classification() {
        assert!(Color::WHITE.is_light());
        assert!(!Color::BLACK.is_light());
        assert!(!Color::from_hex("#3f51b5").unwrap().is_light());
        assert!(Color::from_hex("#ffeb3b").unwrap().is_light());
    }
}
