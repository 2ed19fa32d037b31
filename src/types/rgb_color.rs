// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use wiz_aurora::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.to_array(), [255, 128, 0]);
///
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red, RgbColor::red_color());
/// assert_eq!(red.to_string(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// The color shown before any request arrives.
    pub const AURORA: Self = Self::new(120, 180, 255);

    /// RGB approximation of neutral white light, used to keep the page
    /// decoration meaningful while the bulb runs in white mode.
    pub const WHITE_APPROX: Self = Self::new(200, 220, 255);

    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts formats: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the hex string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_aurora::types::RgbColor;
    ///
    /// let color = RgbColor::from_hex("78B4FF").unwrap();
    /// assert_eq!(color, RgbColor::AURORA);
    ///
    /// let color = RgbColor::from_hex("#0F0").unwrap();
    /// assert_eq!(color.green(), 255);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                    *channel = parse_hex_char(c)? * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = parse_hex_pair(&digits[0..2])?;
                let g = parse_hex_pair(&digits[2..4])?;
                let b = parse_hex_pair(&digits[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ValueError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the channels as `[r, g, b]`.
    #[must_use]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns the color as a hex string with the hash prefix.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Creates a pure red color.
    #[must_use]
    pub const fn red_color() -> Self {
        Self::new(255, 0, 0)
    }

    /// Creates a pure green color.
    #[must_use]
    pub const fn green_color() -> Self {
        Self::new(0, 255, 0)
    }

    /// Creates a pure blue color.
    #[must_use]
    pub const fn blue_color() -> Self {
        Self::new(0, 0, 255)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::AURORA
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(color: RgbColor) -> Self {
        color.to_array()
    }
}

fn parse_hex_char(c: char) -> Result<u8, ValueError> {
    c.to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| ValueError::InvalidHexColor(c.to_string()))
}

fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_new() {
        let color = RgbColor::new(255, 128, 0);
        assert_eq!(color.red(), 255);
        assert_eq!(color.green(), 128);
        assert_eq!(color.blue(), 0);
    }

    #[test]
    fn rgb_from_hex_full() {
        let color = RgbColor::from_hex("#FF5733").unwrap();
        assert_eq!(color, RgbColor::new(255, 87, 51));

        let color = RgbColor::from_hex("00ff00").unwrap();
        assert_eq!(color, RgbColor::green_color());
    }

    #[test]
    fn rgb_from_hex_short() {
        assert_eq!(RgbColor::from_hex("#F00").unwrap(), RgbColor::red_color());
        assert_eq!(RgbColor::from_hex("00F").unwrap(), RgbColor::blue_color());
    }

    #[test]
    fn rgb_from_hex_invalid() {
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("#FF00").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("ÿÿÿ").is_err());
    }

    #[test]
    fn rgb_to_hex_leading_zeros() {
        let color = RgbColor::new(0, 15, 255);
        assert_eq!(color.to_hex_with_hash(), "#000FFF");
    }

    #[test]
    fn rgb_default_is_aurora() {
        assert_eq!(RgbColor::default(), RgbColor::new(120, 180, 255));
    }

    #[test]
    fn rgb_white_approximation() {
        assert_eq!(RgbColor::WHITE_APPROX.to_array(), [200, 220, 255]);
    }

    #[test]
    fn rgb_from_str_and_tuple() {
        let parsed: RgbColor = "#0000FF".parse().unwrap();
        let tuple: RgbColor = (0u8, 0u8, 255u8).into();
        assert_eq!(parsed, tuple);
        assert_eq!(<[u8; 3]>::from(parsed), [0, 0, 255]);
    }
}
