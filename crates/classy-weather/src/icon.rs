/// Display icon categories for WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    RainShower,
    Rain,
    Snow,
    Thunderstorm,
    ThunderstormHail,
    /// Code outside every known group
    Unknown,
}

/// Ordered (codes, icon) groups. Lookup is first match wins.
const ICON_GROUPS: &[(&[i32], WeatherIcon)] = &[
    (&[0], WeatherIcon::ClearSky),
    (&[1], WeatherIcon::MainlyClear),
    (&[2], WeatherIcon::PartlyCloudy),
    (&[3], WeatherIcon::Overcast),
    (&[45, 48], WeatherIcon::Fog),
    (&[51, 56, 61, 66, 80], WeatherIcon::RainShower),
    (&[53, 55, 63, 65, 57, 67, 81, 82], WeatherIcon::Rain),
    (&[71, 73, 75, 77, 85, 86], WeatherIcon::Snow),
    (&[95], WeatherIcon::Thunderstorm),
    (&[96, 99], WeatherIcon::ThunderstormHail),
];

impl WeatherIcon {
    /// Classify a WMO weather code.
    /// See: https://open-meteo.com/en/docs#weathervariables
    ///
    /// Unlisted codes map to `Unknown` rather than a plausible default.
    pub fn from_wmo_code(code: i32) -> Self {
        ICON_GROUPS
            .iter()
            .find(|(codes, _)| codes.contains(&code))
            .map_or(Self::Unknown, |&(_, icon)| icon)
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    /// Glyph shown in the day list
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::MainlyClear => "🌤",
            Self::PartlyCloudy => "⛅️",
            Self::Overcast => "☁️",
            Self::Fog => "🌫",
            Self::RainShower => "🌦",
            Self::Rain => "🌧",
            Self::Snow => "🌨",
            Self::Thunderstorm => "🌩",
            Self::ThunderstormHail => "⛈",
            Self::Unknown => "NOT FOUND",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
