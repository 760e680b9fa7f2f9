use chrono::NaiveDate;
use serde::Deserialize;

use crate::date::parse_date;
use crate::error::WeatherError;
use crate::flag::country_flag;

/// First match of a place-name search
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name; some results omit it
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl GeocodeResult {
    /// Place name followed by the country flag, e.g. "Lisbon 🇵🇹".
    pub fn display_name(&self) -> String {
        match self.country_code.as_deref().and_then(country_flag) {
            Some(flag) => format!("{} {}", self.name, flag),
            None => self.name.clone(),
        }
    }
}

/// Parameters of a daily forecast lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl ForecastRequest {
    /// Build a request from a geocode match; `None` when it has no timezone.
    pub fn for_location(location: &GeocodeResult) -> Option<Self> {
        let timezone = location.timezone.clone().filter(|tz| !tz.is_empty())?;
        Some(Self {
            latitude: location.latitude,
            longitude: location.longitude,
            timezone,
        })
    }
}

/// One day of the forecast window. Values the server has no data for are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temp_min_c: Option<f64>,
    pub temp_max_c: Option<f64>,
}

/// Parallel daily arrays as returned by the forecast endpoint.
/// Open-Meteo sends `null` for days beyond a model's horizon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<Option<i32>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
}

impl DailySeries {
    /// Zip the series into per-day records, keeping server order.
    pub fn into_days(self) -> Result<Vec<ForecastDay>, WeatherError> {
        let len = self.time.len();
        if self.weather_code.len() != len
            || self.temperature_max.len() != len
            || self.temperature_min.len() != len
        {
            return Err(WeatherError::MalformedResponse(format!(
                "daily series lengths differ: time={}, weathercode={}, max={}, min={}",
                len,
                self.weather_code.len(),
                self.temperature_max.len(),
                self.temperature_min.len()
            )));
        }

        self.time
            .iter()
            .zip(self.weather_code)
            .zip(self.temperature_min.into_iter().zip(self.temperature_max))
            .map(|((time, weather_code), (temp_min_c, temp_max_c))| {
                let date = parse_date(time).ok_or_else(|| {
                    WeatherError::MalformedResponse(format!("invalid date: {}", time))
                })?;
                if weather_code.is_none() || temp_min_c.is_none() || temp_max_c.is_none() {
                    tracing::debug!("Forecast for {} is incomplete", date);
                }
                Ok(ForecastDay {
                    date,
                    weather_code,
                    temp_min_c,
                    temp_max_c,
                })
            })
            .collect()
    }
}
