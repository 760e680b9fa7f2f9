use classy_weather::ForecastDay;
use tokio::sync::mpsc::UnboundedSender;

/// Identifies one lookup. Ids increase monotonically per `ViewState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle notifications produced by a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// Query too short to search; forget the previous forecast.
    Cleared(RequestId),
    Started(RequestId),
    Geocoded {
        request: RequestId,
        display_name: String,
    },
    Forecast {
        request: RequestId,
        days: Vec<ForecastDay>,
    },
    /// Sent on every exit path after `Started`.
    Finished(RequestId),
}

impl FetchEvent {
    pub fn request(&self) -> RequestId {
        match self {
            Self::Cleared(request) | Self::Started(request) | Self::Finished(request) => *request,
            Self::Geocoded { request, .. } | Self::Forecast { request, .. } => *request,
        }
    }
}

/// Destination for fetch events.
pub trait FetchSink {
    fn emit(&mut self, event: FetchEvent);
}

impl FetchSink for UnboundedSender<FetchEvent> {
    fn emit(&mut self, event: FetchEvent) {
        if let Err(e) = self.send(event) {
            tracing::debug!("Dropping fetch event, app has shut down: {:?}", e.0);
        }
    }
}

/// Everything the view renders. Single owner; lookups only reach it through
/// `apply`.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    location_query: String,
    is_loading: bool,
    resolved_display_name: Option<String>,
    forecast_days: Vec<ForecastDay>,
    latest_request: RequestId,
}

impl ViewState {
    pub fn new(location_query: impl Into<String>) -> Self {
        Self {
            location_query: location_query.into(),
            ..Self::default()
        }
    }

    pub fn location_query(&self) -> &str {
        &self.location_query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn resolved_display_name(&self) -> Option<&str> {
        self.resolved_display_name.as_deref()
    }

    pub fn forecast_days(&self) -> &[ForecastDay] {
        &self.forecast_days
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    /// Replace the query text. Returns whether it changed.
    pub fn set_location_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.location_query {
            return false;
        }
        self.location_query = query;
        true
    }

    /// Issue the id for a new lookup; earlier lookups become stale.
    pub fn begin_request(&mut self) -> RequestId {
        self.latest_request = RequestId(self.latest_request.0 + 1);
        self.latest_request
    }

    /// Apply an event from the latest lookup. Events from superseded lookups
    /// are ignored so a slow response cannot overwrite a newer search.
    /// Returns whether the event was applied.
    pub fn apply(&mut self, event: FetchEvent) -> bool {
        let request = event.request();
        if request != self.latest_request {
            tracing::debug!(
                "Ignoring stale event from {} (latest {})",
                request,
                self.latest_request
            );
            return false;
        }

        match event {
            FetchEvent::Cleared(_) => {
                self.forecast_days.clear();
                self.is_loading = false;
            }
            FetchEvent::Started(_) => self.is_loading = true,
            FetchEvent::Geocoded { display_name, .. } => {
                self.resolved_display_name = Some(display_name);
            }
            FetchEvent::Forecast { days, .. } => self.forecast_days = days,
            FetchEvent::Finished(_) => self.is_loading = false,
        }
        true
    }
}

impl FetchSink for ViewState {
    fn emit(&mut self, event: FetchEvent) {
        self.apply(event);
    }
}
