use crate::foundation::error::{DanmakuError, DanmakuResult};

/// Host viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Dimensions used when the host cannot report its own.
    pub const FALLBACK: Self = Self {
        width: 1200.0,
        height: 800.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Resolve host-reported dimensions, replacing each missing or unusable axis
    /// (absent, zero, negative, NaN, infinite) with the fallback value.
    pub fn resolve(width: Option<f64>, height: Option<f64>) -> Self {
        fn usable(v: Option<f64>) -> Option<f64> {
            v.filter(|v| v.is_finite() && *v > 0.0)
        }

        let w = usable(width);
        let h = usable(height);
        if w.is_none() || h.is_none() {
            tracing::debug!(?width, ?height, "viewport unavailable, using fallback");
        }
        Self {
            width: w.unwrap_or(Self::FALLBACK.width),
            height: h.unwrap_or(Self::FALLBACK.height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Closed interval `[min, max]` of travel durations in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DurationRange {
    /// Shortest travel time (inclusive).
    pub min: f64,
    /// Longest travel time (inclusive).
    pub max: f64,
}

impl DurationRange {
    /// Create a validated range with `0 < min <= max`.
    pub fn new(min: f64, max: f64) -> DanmakuResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DanmakuError::validation(
                "DurationRange bounds must be finite",
            ));
        }
        if min <= 0.0 {
            return Err(DanmakuError::validation("DurationRange min must be > 0"));
        }
        if min > max {
            return Err(DanmakuError::validation("DurationRange min must be <= max"));
        }
        Ok(Self { min, max })
    }

    /// Return `true` when `secs` lies inside `[min, max]`.
    pub fn contains(self, secs: f64) -> bool {
        self.min <= secs && secs <= self.max
    }

    /// Draw a duration uniformly from the closed interval.
    pub fn sample<R: rand::Rng + ?Sized>(self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for DurationRange {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 18.0,
        }
    }
}

impl<'de> serde::Deserialize<'de> for DurationRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { min: f64, max: f64 },
        }

        let (min, max) = match Repr::deserialize(deserializer)? {
            Repr::Arr([min, max]) => (min, max),
            Repr::Obj { min, max } => (min, max),
        };
        Self::new(min, max).map_err(serde::de::Error::custom)
    }
}

/// Premultiplied RGBA8 display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> DanmakuResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let digit = |i: usize| -> DanmakuResult<u8> {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map_err(|_| DanmakuError::validation(format!("invalid hex color '{s}'")))
        };
        let byte = |i: usize| -> DanmakuResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| DanmakuError::validation(format!("invalid hex color '{s}'")))
        };

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DanmakuError::validation(format!("invalid hex color '{s}'")));
        }
        match hex.len() {
            3 => {
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                Ok(Self::from_straight_rgba(r * 17, g * 17, b * 17, 255))
            }
            6 => Ok(Self::from_straight_rgba(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(Self::from_straight_rgba(
                byte(0)?,
                byte(2)?,
                byte(4)?,
                byte(6)?,
            )),
            _ => Err(DanmakuError::validation(format!(
                "hex color '{s}' must have 3, 6 or 8 digits"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
