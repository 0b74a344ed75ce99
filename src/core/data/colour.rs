#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Floors each channel and clamps it into `0..=255`.
    #[must_use]
    pub fn from_unit_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_unit(r),
            g: channel_from_unit(g),
            b: channel_from_unit(b),
        }
    }
}

/// `floor(255 * value)` clamped into a byte. NaN maps to 0.
#[must_use]
pub fn channel_from_unit(value: f64) -> u8 {
    channel_from_scaled(255.0 * value)
}

/// `floor(value)` clamped into a byte. NaN maps to 0.
#[must_use]
pub fn channel_from_scaled(value: f64) -> u8 {
    let floored = value.floor();

    if floored.is_nan() {
        0
    } else {
        floored.clamp(0.0, 255.0) as u8
    }
}
