//! Render units. Each takes explicit props and returns the text to display.

use classy_weather::{display_max, display_min, weekday_label, ForecastDay, WeatherIcon};

use crate::state::ViewState;

pub const TITLE: &str = "Classy Weather";
pub const PLACEHOLDER: &str = "Search for location...";
pub const LOADING: &str = "Loading...";
/// Shown in place of a temperature the server had no data for
pub const MISSING: &str = "–";
pub const HELP: &str = "Type a location and press Enter · :get to refresh · :quit to exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputProps<'a> {
    pub location: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayProps {
    pub icon: WeatherIcon,
    pub label: String,
    pub min_f: Option<i64>,
    pub max_f: Option<i64>,
    pub is_today: bool,
}

impl DayProps {
    pub fn new(day: &ForecastDay, is_today: bool) -> Self {
        Self {
            icon: day
                .weather_code
                .map_or(WeatherIcon::Unknown, WeatherIcon::from_wmo_code),
            label: if is_today {
                "Today".to_string()
            } else {
                weekday_label(day.date)
            },
            min_f: day.temp_min_c.map(display_min),
            max_f: day.temp_max_c.map(display_max),
            is_today,
        }
    }
}

/// Per-day view models; the first day is today.
pub fn day_props(days: &[ForecastDay]) -> Vec<DayProps> {
    days.iter()
        .enumerate()
        .map(|(i, day)| DayProps::new(day, i == 0))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherProps<'a> {
    pub location: &'a str,
    pub days: Vec<DayProps>,
}

/// Whether the weather panel is on screen for this state.
pub fn shows_weather(state: &ViewState) -> bool {
    !state.is_loading() && !state.forecast_days().is_empty()
}

pub fn render_app(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&render_input(InputProps {
        location: state.location_query(),
    }));
    out.push_str("  ");
    out.push_str(&render_button());
    out.push('\n');

    if state.is_loading() {
        out.push_str(LOADING);
        out.push('\n');
    } else if shows_weather(state) {
        out.push_str(&render_weather(&WeatherProps {
            location: state.resolved_display_name().unwrap_or_default(),
            days: day_props(state.forecast_days()),
        }));
    }

    out
}

pub fn render_input(props: InputProps<'_>) -> String {
    if props.location.is_empty() {
        format!("[ {} ]", PLACEHOLDER)
    } else {
        format!("[ {} ]", props.location)
    }
}

pub fn render_button() -> String {
    "[ Get weather ]".to_string()
}

pub fn render_weather(props: &WeatherProps<'_>) -> String {
    let mut out = format!("Weather in {}\n", props.location);
    for day in &props.days {
        out.push_str(&render_day(day));
        out.push('\n');
    }
    out
}

fn degrees(value: Option<i64>) -> String {
    match value {
        Some(value) => format!("{}°", value),
        None => MISSING.to_string(),
    }
}

pub fn render_day(props: &DayProps) -> String {
    format!(
        "  {}  {:<5}  {} — {}",
        props.icon,
        props.label,
        degrees(props.min_f),
        degrees(props.max_f)
    )
}
