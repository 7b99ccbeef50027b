// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature display unit and conversion.

/// Temperature display unit of a climate accessory.
///
/// The vendor API always speaks Celsius; conversion is applied only at the
/// get/set boundary, never stored.
///
/// # Examples
///
/// ```
/// use switchbot_cloud::types::TemperatureUnit;
///
/// assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(86.0), 30.0);
/// assert_eq!(TemperatureUnit::Celsius.to_celsius(26.4), 26.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a display value in this unit to whole degrees Celsius.
    ///
    /// Values are rounded to the nearest degree, matching the granularity
    /// the vendor command set accepts.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value.round(),
            Self::Fahrenheit => ((value - 32.0) * 5.0 / 9.0).round(),
        }
    }

    /// Converts whole degrees Celsius to a display value in this unit.
    #[must_use]
    pub fn from_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value * 9.0 / 5.0 + 32.0).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_to_celsius() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(86.0), 30.0);
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(32.0), 0.0);
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(78.8), 26.0);
    }

    #[test]
    fn celsius_is_rounded_only() {
        assert_eq!(TemperatureUnit::Celsius.to_celsius(26.4), 26.0);
        assert_eq!(TemperatureUnit::Celsius.to_celsius(26.5), 27.0);
    }

    #[test]
    fn celsius_to_fahrenheit() {
        assert_eq!(TemperatureUnit::Fahrenheit.from_celsius(30.0), 86.0);
        assert_eq!(TemperatureUnit::Celsius.from_celsius(30.0), 30.0);
    }
}
