//! Forecast orchestration: place name -> geocode -> forecast -> day list.
//!
//! Failures are logged and never surfaced; the view simply keeps what it had.

use classy_weather::{ForecastRequest, WeatherError, WeatherSource};
use tracing::instrument;

use crate::state::{FetchEvent, FetchSink, RequestId, ViewState};

/// Queries shorter than this (in characters) never hit the network.
pub const MIN_QUERY_CHARS: usize = 2;

pub struct ForecastOrchestrator<S> {
    source: S,
}

impl<S: WeatherSource> ForecastOrchestrator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look up the forecast for the state's current query, applying results
    /// directly to `state`.
    pub async fn fetch_weather(&self, state: &mut ViewState) {
        let request = state.begin_request();
        let query = state.location_query().to_string();
        self.run(request, &query, state).await;
    }

    /// Run one lookup, reporting progress to `sink`.
    #[instrument(skip(self, request, sink), fields(request = %request))]
    pub async fn run<K: FetchSink + Send>(&self, request: RequestId, query: &str, sink: &mut K) {
        if query.chars().count() < MIN_QUERY_CHARS {
            tracing::debug!("Query '{}' too short, clearing forecast", query);
            sink.emit(FetchEvent::Cleared(request));
            return;
        }

        sink.emit(FetchEvent::Started(request));

        if let Err(e) = self.lookup(request, query, sink).await {
            match &e {
                WeatherError::LocationNotFound(_) => tracing::warn!("{}", e),
                _ => tracing::error!("Weather lookup for '{}' failed: {}", query, e),
            }
        }

        sink.emit(FetchEvent::Finished(request));
    }

    async fn lookup<K: FetchSink + Send>(
        &self,
        request: RequestId,
        query: &str,
        sink: &mut K,
    ) -> Result<(), WeatherError> {
        let location = self
            .source
            .geocode(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(query.to_string()))?;

        tracing::info!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            query,
            location.name,
            location.latitude,
            location.longitude
        );

        sink.emit(FetchEvent::Geocoded {
            request,
            display_name: location.display_name(),
        });

        let Some(forecast_request) = ForecastRequest::for_location(&location) else {
            tracing::info!("{} has no timezone, skipping forecast", location.name);
            return Ok(());
        };

        let days = self.source.forecast(&forecast_request).await?.into_days()?;
        tracing::info!("Fetched {} forecast days for {}", days.len(), location.name);

        sink.emit(FetchEvent::Forecast { request, days });
        Ok(())
    }
}
