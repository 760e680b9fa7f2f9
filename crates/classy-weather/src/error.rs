//! Weather lookup error types.

use classy_core::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] NetworkError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::MalformedResponse(e.to_string())
        } else {
            Self::NetworkFailure(e.into_network_error())
        }
    }
}

impl WeatherError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::LocationNotFound(_) => "Location not found. Check the spelling and try again.",
            Self::NetworkFailure(e) => e.user_message(),
            Self::MalformedResponse(_) => "Received unexpected weather data. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = WeatherError::LocationNotFound("zzzznotaplace".into());
        assert!(err.user_message().contains("not found"));
        assert!(err.to_string().contains("zzzznotaplace"));

        let err = WeatherError::NetworkFailure(NetworkError::Timeout);
        assert!(err.user_message().contains("timed out"));

        let err = WeatherError::MalformedResponse("missing field".into());
        assert!(err.user_message().contains("unexpected"));
    }
}
