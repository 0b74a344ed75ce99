use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalBoundsError {
    NonFinite {
        min_real: f64,
        max_real: f64,
        min_imaginary: f64,
        max_imaginary: f64,
    },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for FractalBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                min_real,
                max_real,
                min_imaginary,
                max_imaginary,
            } => {
                write!(
                    f,
                    "fractal bounds must be finite: real {}..{}, imaginary {}..{}",
                    min_real, max_real, min_imaginary, max_imaginary
                )
            }
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "fractal bounds size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for FractalBoundsError {}

/// Axis-aligned viewport onto the complex plane.
///
/// Always satisfies `min_real < max_real` and `min_imaginary < max_imaginary`
/// with finite edges; deserialisation goes through the same check as [`FractalBounds::new`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundsRecord", into = "BoundsRecord")]
pub struct FractalBounds {
    min_real: f64,
    max_real: f64,
    min_imaginary: f64,
    max_imaginary: f64,
}

#[derive(Serialize, Deserialize)]
struct BoundsRecord {
    min_real: f64,
    max_real: f64,
    min_imaginary: f64,
    max_imaginary: f64,
}

impl TryFrom<BoundsRecord> for FractalBounds {
    type Error = FractalBoundsError;

    fn try_from(record: BoundsRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.min_real,
            record.max_real,
            record.min_imaginary,
            record.max_imaginary,
        )
    }
}

impl From<FractalBounds> for BoundsRecord {
    fn from(bounds: FractalBounds) -> Self {
        Self {
            min_real: bounds.min_real,
            max_real: bounds.max_real,
            min_imaginary: bounds.min_imaginary,
            max_imaginary: bounds.max_imaginary,
        }
    }
}

impl FractalBounds {
    pub fn new(
        min_real: f64,
        max_real: f64,
        min_imaginary: f64,
        max_imaginary: f64,
    ) -> Result<Self, FractalBoundsError> {
        let all_finite = [min_real, max_real, min_imaginary, max_imaginary]
            .iter()
            .all(|v| v.is_finite());

        if !all_finite {
            return Err(FractalBoundsError::NonFinite {
                min_real,
                max_real,
                min_imaginary,
                max_imaginary,
            });
        }

        let width = max_real - min_real;
        let height = max_imaginary - min_imaginary;

        if width <= 0.0 || height <= 0.0 {
            return Err(FractalBoundsError::InvalidSize { width, height });
        }

        Ok(Self {
            min_real,
            max_real,
            min_imaginary,
            max_imaginary,
        })
    }

    /// Builds bounds the caller has already proven valid.
    ///
    /// Used for rectangles derived from valid inputs (translations, zooms with a
    /// positive scale). Degenerate results from precision exhaustion are caught
    /// later by `FractalConfig::validate`.
    pub(crate) const fn from_edges_unchecked(
        min_real: f64,
        max_real: f64,
        min_imaginary: f64,
        max_imaginary: f64,
    ) -> Self {
        Self {
            min_real,
            max_real,
            min_imaginary,
            max_imaginary,
        }
    }

    /// Re-checks the invariant, for bounds that came from arithmetic.
    pub fn validate(&self) -> Result<(), FractalBoundsError> {
        Self::new(
            self.min_real,
            self.max_real,
            self.min_imaginary,
            self.max_imaginary,
        )
        .map(|_| ())
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.min_real
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.max_real
    }

    #[must_use]
    pub fn min_imaginary(&self) -> f64 {
        self.min_imaginary
    }

    #[must_use]
    pub fn max_imaginary(&self) -> f64 {
        self.max_imaginary
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_real - self.min_real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_imaginary - self.min_imaginary
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.min_real + self.max_real) / 2.0,
            imag: (self.min_imaginary + self.max_imaginary) / 2.0,
        }
    }

    #[must_use]
    pub fn translate(&self, real_delta: f64, imag_delta: f64) -> Self {
        Self {
            min_real: self.min_real + real_delta,
            max_real: self.max_real + real_delta,
            min_imaginary: self.min_imaginary + imag_delta,
            max_imaginary: self.max_imaginary + imag_delta,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min_real <= point.real
            && self.min_imaginary <= point.imag
            && self.max_real >= point.real
            && self.max_imaginary >= point.imag
    }
}

/// The classic full-set framing.
impl Default for FractalBounds {
    fn default() -> Self {
        Self::from_edges_unchecked(-2.5, 1.0, -1.25, 1.25)
    }
}
