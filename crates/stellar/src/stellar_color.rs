use serde::{Deserialize, Serialize};

/// Normalized RGBA emission color of a star
///
/// Channels are in `[0, 1]`; alpha is always 1.0 for colors produced by
/// [`StellarColor::from_temperature`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl StellarColor {
    // Blackbody-to-RGB curve fit (Tanner Helland, 2012), expressed on an
    // 8-bit scale and divided by 256 here.

    /// Red channel fit for hot stars
    const RED_COEFF: f64 = 329.698727446;
    const RED_EXP: f64 = -0.1332047592;

    /// Green channel fits
    const GREEN_COOL_COEFF: f64 = 99.4708025861;
    const GREEN_COOL_OFFSET: f64 = -161.1195681661;
    const GREEN_HOT_COEFF: f64 = 288.1221695283;
    const GREEN_HOT_EXP: f64 = -0.0755148492;

    /// Blue channel fit between the cutoffs
    const BLUE_COEFF: f64 = 138.5177312231;
    const BLUE_OFFSET: f64 = -305.0447927307;

    const CHANNEL_SCALE: f64 = 256.0;

    /// Below this the red channel saturates and green follows the cool fit (K)
    const RED_GREEN_THRESHOLD: f64 = 6600.0;
    /// No blue emission below this (K)
    const BLUE_CUTOFF: f64 = 2000.0;
    /// Blue saturates above this (K)
    const BLUE_SATURATION: f64 = 6500.0;

    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Approximate color of a blackbody at `temperature` Kelvin
    ///
    /// Every channel is clamped to `[0, 1]`. The blue log fit needs
    /// `temperature / 100 - 10 > 0`, which holds on the whole
    /// `[2000, 6500]` K interval where it is used.
    ///
    /// # Example
    /// ```
    /// use stellar::StellarColor;
    ///
    /// let sun = StellarColor::from_temperature(5772.0);
    /// assert_eq!(sun.r, 1.0);
    /// assert!(sun.b < sun.g);
    /// ```
    pub fn from_temperature(temperature: f64) -> Self {
        let t = temperature / 100.0;

        let (r, g) = if temperature < Self::RED_GREEN_THRESHOLD {
            let g = (Self::GREEN_COOL_COEFF * t.ln() + Self::GREEN_COOL_OFFSET) / Self::CHANNEL_SCALE;
            (1.0, clamp_unit(g))
        } else {
            let r = Self::RED_COEFF * (t - 60.0).powf(Self::RED_EXP) / Self::CHANNEL_SCALE;
            let g = Self::GREEN_HOT_COEFF / Self::CHANNEL_SCALE
                * (t - 60.0).powf(Self::GREEN_HOT_EXP);
            (clamp_unit(r), clamp_unit(g))
        };

        let b = match temperature {
            temp if temp < Self::BLUE_CUTOFF => 0.0,
            temp if temp > Self::BLUE_SATURATION => 1.0,
            _ => clamp_unit(
                (Self::BLUE_COEFF * (t - 10.0).ln() + Self::BLUE_OFFSET) / Self::CHANNEL_SCALE,
            ),
        };

        Self::opaque(r, g, b)
    }

    /// Channels narrowed for GPU upload
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }

    /// Returns the color as an 8-bit hex string (e.g., "#FF9944"), alpha dropped
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// Parse a hex color string (e.g., "#FF9944" or "FF9944") as an opaque color
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 || !s.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&s[range.clone()], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| format!("Invalid {} component: {}", name, &s[range]))
        };

        Ok(Self::opaque(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }
}

impl Default for StellarColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// `max(0, min(1, v))`; `f64::min` drops a NaN operand, so this never yields NaN
fn clamp_unit(v: f64) -> f64 {
    v.min(1.0).max(0.0)
}

fn to_byte(channel: f64) -> u8 {
    (clamp_unit(channel) * 255.0).round() as u8
}
