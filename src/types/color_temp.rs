// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! White color temperature.

use std::fmt;

use crate::error::ValueError;

/// Color temperature in Kelvin (1000-10000).
///
/// WiZ bulbs take white temperature directly in Kelvin. Lower values are
/// warmer (more orange), higher values are cooler (bluer). Most bulbs only
/// render 2200-6500 K and saturate outside that band.
///
/// # Examples
///
/// ```
/// use wiz_aurora::types::ColorTemp;
///
/// let ct = ColorTemp::new(2700).unwrap();
/// assert_eq!(ct.kelvin(), 2700);
///
/// assert!(ColorTemp::new(500).is_err());
/// assert_eq!(ColorTemp::NEUTRAL.kelvin(), 4000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemp(u16);

impl ColorTemp {
    /// Minimum accepted temperature.
    pub const MIN: u16 = 1000;

    /// Maximum accepted temperature.
    pub const MAX: u16 = 10000;

    /// Warm white (~2700K).
    pub const WARM: Self = Self(2700);

    /// Neutral white (~4000K).
    pub const NEUTRAL: Self = Self(4000);

    /// Cool daylight (~6500K).
    pub const COOL: Self = Self(6500);

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1000, 10000].
    pub fn new(kelvin: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&kelvin) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: kelvin,
            });
        }
        Ok(Self(kelvin))
    }

    /// Creates a color temperature, clamping to the valid range.
    #[must_use]
    pub const fn clamped(kelvin: u16) -> Self {
        if kelvin < Self::MIN {
            Self(Self::MIN)
        } else if kelvin > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(kelvin)
        }
    }

    /// Returns the temperature in Kelvin.
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        self.0
    }
}

impl Default for ColorTemp {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temp_bounds() {
        assert!(ColorTemp::new(ColorTemp::MIN).is_ok());
        assert!(ColorTemp::new(ColorTemp::MAX).is_ok());
        assert_eq!(
            ColorTemp::new(999),
            Err(ValueError::OutOfRange {
                min: 1000,
                max: 10000,
                actual: 999
            })
        );
        assert!(ColorTemp::new(10001).is_err());
    }

    #[test]
    fn color_temp_clamped() {
        assert_eq!(ColorTemp::clamped(0).kelvin(), 1000);
        assert_eq!(ColorTemp::clamped(20000).kelvin(), 10000);
        assert_eq!(ColorTemp::clamped(3000).kelvin(), 3000);
    }

    #[test]
    fn color_temp_presets_are_ordered() {
        assert!(ColorTemp::WARM < ColorTemp::NEUTRAL);
        assert!(ColorTemp::NEUTRAL < ColorTemp::COOL);
        assert_eq!(ColorTemp::default(), ColorTemp::NEUTRAL);
    }

    #[test]
    fn color_temp_display() {
        assert_eq!(ColorTemp::NEUTRAL.to_string(), "4000K");
    }
}
