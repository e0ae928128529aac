use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// sRGB color parsed from a `#rrggbb` (or `#rgb`) string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    srgb: [f32; 3],
}

impl HexColor {
    pub const WHITE: HexColor = HexColor { srgb: [1.0, 1.0, 1.0] };

    pub fn parse(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("color {:?} must start with '#'", hex))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("color {:?} contains non-hex digits", hex);
        }

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => bail!("color {:?} must have 3 or 6 hex digits", hex),
        };

        let channel = |i: usize| -> Result<f32> {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| anyhow!("color {:?} contains non-hex digits", hex))
        };

        Ok(Self {
            srgb: [channel(0)?, channel(2)?, channel(4)?],
        })
    }

    pub fn srgb(&self) -> [f32; 3] {
        self.srgb
    }

    /// Linear-light components, what the shaders and color blending work in
    pub fn linear(&self) -> [f32; 3] {
        self.srgb.map(srgb_to_linear)
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.srgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn lerp_rgb(from: [f32; 3], to: [f32; 3], t: f32) -> [f32; 3] {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

/// HSL to sRGB, all components in [0, 1]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };

    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}
