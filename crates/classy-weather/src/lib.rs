//! Weather lookups for Classy Weather
//!
//! Open-Meteo geocoding and daily forecasts, plus the small pure helpers
//! used to present them: weather-code icons, country flags, weekday labels
//! and Fahrenheit display values.

pub mod date;
pub mod error;
pub mod flag;
pub mod icon;
pub mod provider;
pub mod temperature;
pub mod types;

pub use date::{format_day, weekday_label};
pub use error::WeatherError;
pub use flag::country_flag;
pub use icon::WeatherIcon;
pub use provider::{OpenMeteoClient, WeatherSource};
pub use temperature::{celsius_to_fahrenheit, display_max, display_min};
pub use types::*;
