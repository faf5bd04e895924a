use crate::color::Color;

/// The closed set of tone identifiers a palette is made of.
///
/// Declaration order is the canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stop {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    A100,
    A200,
    A400,
    A700,
}

impl Stop {
    pub const ALL: [Stop; 14] = [
        Stop::S50,
        Stop::S100,
        Stop::S200,
        Stop::S300,
        Stop::S400,
        Stop::S500,
        Stop::S600,
        Stop::S700,
        Stop::S800,
        Stop::S900,
        Stop::A100,
        Stop::A200,
        Stop::A400,
        Stop::A700,
    ];

    /// The identifier used in generated stylesheets.
    pub fn name(self) -> &'static str {
        match self {
            Stop::S50 => "50",
            Stop::S100 => "100",
            Stop::S200 => "200",
            Stop::S300 => "300",
            Stop::S400 => "400",
            Stop::S500 => "500",
            Stop::S600 => "600",
            Stop::S700 => "700",
            Stop::S800 => "800",
            Stop::S900 => "900",
            Stop::A100 => "A100",
            Stop::A200 => "A200",
            Stop::A400 => "A400",
            Stop::A700 => "A700",
        }
    }
}

/// One palette entry: a tone plus the black-or-white color that stays
/// legible on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub stop: Stop,
    pub color: Color,
    pub contrast: Color,
}

/// A full 14-stop tonal palette derived from a single seed color.
///
/// Always holds exactly one swatch per [`Stop`], in canonical order.
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonalPalette {
    swatches: [Swatch; 14],
}

const ACCENT_BASE_MIX: u8 = 15;

impl TonalPalette {
    /// Derives the full tonal palette for `seed`.
    ///
    /// Pure and deterministic: the same seed always yields the same
    /// fourteen hex values. A valid seed has no failure modes; internal
    /// adjustments clamp instead of erroring.
    pub fn generate(seed: Color) -> TonalPalette {
        let white = Color::WHITE;
        let dark = seed.multiply(seed);
        // the accent hue sits 270 degrees around the wheel from the seed
        let accent_base = seed.tetrad()[3];
        let accent = seed.mix(accent_base, ACCENT_BASE_MIX);

        // Endpoint weights below are the endpoint's share of the blend, so
        // stop 500 resolves to the dark endpoint itself, not the seed. That
        // quirk is part of the output contract: generated themes depend on
        // these exact values. The accent stops set their saturation and
        // lightness channels to absolute percentages.
        let swatches = Stop::ALL.map(|stop| {
            let color = match stop {
                Stop::S50 => seed.mix(white, 12),
                Stop::S100 => seed.mix(white, 30),
                Stop::S200 => seed.mix(white, 50),
                Stop::S300 => seed.mix(white, 70),
                Stop::S400 => seed.mix(white, 85),
                Stop::S500 => seed.mix(dark, 100),
                Stop::S600 => seed.mix(dark, 87),
                Stop::S700 => seed.mix(dark, 70),
                Stop::S800 => seed.mix(dark, 54),
                Stop::S900 => seed.mix(dark, 25),
                Stop::A100 => accent.saturate_to(80).lighten_to(65),
                Stop::A200 => accent.saturate_to(80).lighten_to(55),
                Stop::A400 => accent.saturate_to(100).lighten_to(45),
                Stop::A700 => accent.saturate_to(100).lighten_to(40),
            };
            Swatch::new(stop, color)
        });
        TonalPalette { swatches }
    }

    /// The swatches in canonical stop order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn get(&self, stop: Stop) -> &Swatch {
        &self.swatches[stop as usize]
    }
}

impl Swatch {
    fn new(stop: Stop, color: Color) -> Swatch {
        let contrast = if color.is_light() {
            Color::BLACK
        } else {
            Color::WHITE
        };
        Swatch {
            stop,
            color,
            contrast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDS: [&str; 5] = ["#3f51b5", "#ff4081", "#9c27b0", "#eeff41", "#607d8b"];

    #[test]
    fn test_generate_covers_all_stops_in_order() {
        for seed in SEEDS {
            let palette = TonalPalette::generate(Color::from_hex(seed).unwrap());
            assert_eq!(palette.swatches().len(), 14);
            for (swatch, stop) in palette.swatches().iter().zip(Stop::ALL) {
                assert_eq!(swatch.stop, stop);
            }
        }
    }

    #[test]
    fn test_swatches_are_valid_hex_with_binary_contrast() {
        for seed in SEEDS {
            let palette = TonalPalette::generate(Color::from_hex(seed).unwrap());
            for swatch in palette.swatches() {
                let hex = swatch.color.hex8();
                assert_eq!(hex.len(), 9);
                assert!(hex.strip_prefix('#').unwrap().chars().all(|c| c.is_ascii_hexdigit()));
                let contrast = swatch.contrast.hex();
                assert!(contrast == "#000000" || contrast == "#ffffff");
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let seed = Color::from_hex("#3f51b5").unwrap();
        assert_eq!(TonalPalette::generate(seed), TonalPalette::generate(seed));
    }

    #[test]
    fn test_stop_500_is_the_multiply_darkened_endpoint() {
        let seed = Color::from_hex("#3f51b5").unwrap();
        let palette = TonalPalette::generate(seed);
        assert_eq!(palette.get(Stop::S500).color, seed.multiply(seed));
        assert_eq!(palette.get(Stop::S500).color.hex(), "#0f1980");
    }

    #[test]
    fn test_stop_50_reads_lighter_than_stop_900() {
        for seed in ["#3f51b5", "#9c27b0", "#607d8b"] {
            let palette = TonalPalette::generate(Color::from_hex(seed).unwrap());
            let lightest = palette.get(Stop::S50).color.brightness();
            let darkest = palette.get(Stop::S900).color.brightness();
            assert!(lightest > darkest, "seed {seed}: {lightest} <= {darkest}");
        }
    }

    #[test]
    fn test_contrast_follows_brightness_threshold() {
        for seed in SEEDS {
            let palette = TonalPalette::generate(Color::from_hex(seed).unwrap());
            for swatch in palette.swatches() {
                let expected = if swatch.color.brightness() >= 128.0 {
                    Color::BLACK
                } else {
                    Color::WHITE
                };
                assert_eq!(swatch.contrast, expected, "stop {}", swatch.stop.name());
            }
        }
    }

    #[test]
    fn test_accent_stops_carry_absolute_channels() {
        use palette::{FromColor, Hsl, Srgb};

        let seed = Color::from_hex("#3f51b5").unwrap();
        let palette = TonalPalette::generate(seed);
        let expectations = [
            (Stop::A100, 0.80, 0.65),
            (Stop::A200, 0.80, 0.55),
            (Stop::A400, 1.00, 0.45),
            (Stop::A700, 1.00, 0.40),
        ];
        for (stop, saturation, lightness) in expectations {
            let color = palette.get(stop).color;
            let hsl = Hsl::from_color(Srgb::new(
                f32::from(color.r) / 255.0,
                f32::from(color.g) / 255.0,
                f32::from(color.b) / 255.0,
            ));
            // u8 round-trip shifts the channels by less than a percent
            assert!(
                (hsl.saturation - saturation).abs() < 0.02,
                "stop {}: saturation {} != {saturation}",
                stop.name(),
                hsl.saturation
            );
            assert!(
                (hsl.lightness - lightness).abs() < 0.02,
                "stop {}: lightness {} != {lightness}",
                stop.name(),
                hsl.lightness
            );
        }
    }
}
