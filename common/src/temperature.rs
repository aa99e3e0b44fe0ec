//! # Temperature Bounds
//!
//! Celsius bounds for refrigerated containers and the conversions between
//! Celsius and Fahrenheit.
//!
//! A [`TemperatureRange`] is a small value object shared by every refrigerated
//! variant. Narrowing the allowed range means building a different range, not
//! overriding a setter.

use thiserror::Error;

/// Warmest temperature a refrigerated container may be set to.
pub const MAX_CELSIUS: f64 = 4.0;

/// Coldest temperature a heated refrigerated container may be set to.
pub const MIN_CELSIUS: f64 = -20.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TemperatureError {
    #[error("temperature is too hot: {celsius}°C exceeds the maximum of {max}°C")]
    TooHot { celsius: f64, max: f64 },

    #[error("temperature is too cold: {celsius}°C is below the minimum of {min}°C")]
    TooCold { celsius: f64, min: f64 },

    #[error("temperature is not a number")]
    NotANumber,
}

/// Closed Celsius interval with an optional lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    min: Option<f64>,
    max: f64,
}

impl TemperatureRange {
    pub fn new(min: Option<f64>, max: f64) -> Self {
        Self { min, max }
    }

    /// Upper bound only, as used by plain refrigerated containers.
    pub fn refrigerated() -> Self {
        Self::new(None, MAX_CELSIUS)
    }

    /// `MIN_CELSIUS..=MAX_CELSIUS`, as used by heated refrigerated containers.
    pub fn heated() -> Self {
        Self::new(Some(MIN_CELSIUS), MAX_CELSIUS)
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `celsius` back if it lies inside the range.
    ///
    /// The lower bound is checked before the upper bound, so a value violating
    /// both (only possible for an inverted range) reports `TooCold`.
    pub fn check(&self, celsius: f64) -> Result<f64, TemperatureError> {
        if celsius.is_nan() {
            return Err(TemperatureError::NotANumber);
        }
        if let Some(min) = self.min {
            if celsius < min {
                return Err(TemperatureError::TooCold { celsius, min });
            }
        }
        if celsius > self.max {
            return Err(TemperatureError::TooHot { celsius, max: self.max });
        }
        Ok(celsius)
    }

    pub fn contains(&self, celsius: f64) -> bool {
        self.check(celsius).is_ok()
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self::refrigerated()
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
