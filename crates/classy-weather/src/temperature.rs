//! Celsius to Fahrenheit conversion for display.
//!
//! Minimums round down and maximums round up so the displayed range is never
//! narrower than the forecast range.

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Daily minimum in whole degrees Fahrenheit, floored.
pub fn display_min(celsius: f64) -> i64 {
    celsius_to_fahrenheit(celsius).floor() as i64
}

/// Daily maximum in whole degrees Fahrenheit, ceiled.
pub fn display_max(celsius: f64) -> i64 {
    celsius_to_fahrenheit(celsius).ceil() as i64
}
