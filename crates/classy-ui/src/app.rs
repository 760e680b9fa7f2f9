//! Application lifecycle and the terminal event loop.

use std::sync::Arc;

use classy_core::{AppError, SessionStore};
use classy_weather::WeatherSource;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::services::weather_service::ForecastOrchestrator;
use crate::state::{FetchEvent, RequestId, ViewState};
use crate::views;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New contents of the location field
    Edit(String),
    /// The "Get weather" button
    Get,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":get" => Self::Get,
            ":quit" => Self::Quit,
            _ => Self::Edit(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

pub struct WeatherApp<S> {
    orchestrator: Arc<ForecastOrchestrator<S>>,
    session: SessionStore,
    state: ViewState,
    events_tx: UnboundedSender<FetchEvent>,
    events_rx: UnboundedReceiver<FetchEvent>,
    weather_mounted: bool,
}

impl<S: WeatherSource + 'static> WeatherApp<S> {
    pub fn new(source: S, session: SessionStore) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            orchestrator: Arc::new(ForecastOrchestrator::new(source)),
            session,
            state: ViewState::default(),
            events_tx,
            events_rx,
            weather_mounted: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Restore the saved location and start the first lookup.
    pub fn initialize(&mut self) -> RequestId {
        let location = match self.session.load_location() {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("{} ({})", e.user_message(), e);
                String::new()
            }
        };

        tracing::info!("Starting with location '{}'", location);
        self.state.set_location_query(location);
        self.request_fetch()
    }

    /// Edit the location field. A changed value is saved and looked up.
    pub fn set_location(&mut self, query: impl Into<String>) -> Option<RequestId> {
        if !self.state.set_location_query(query) {
            return None;
        }

        if let Err(e) = self.session.save_location(self.state.location_query()) {
            tracing::warn!("{} ({})", e.user_message(), e);
        }

        Some(self.request_fetch())
    }

    /// Start a lookup for the current query on a background task.
    pub fn request_fetch(&mut self) -> RequestId {
        let request = self.state.begin_request();
        let query = self.state.location_query().to_string();
        let orchestrator = Arc::clone(&self.orchestrator);
        let mut events = self.events_tx.clone();

        tokio::spawn(async move {
            orchestrator.run(request, &query, &mut events).await;
        });

        request
    }

    /// Apply an event from a lookup. Returns whether the state changed.
    pub fn handle_event(&mut self, event: FetchEvent) -> bool {
        self.state.apply(event)
    }

    /// Wait for the next event from any lookup.
    pub async fn next_event(&mut self) -> Option<FetchEvent> {
        self.events_rx.recv().await
    }

    /// Render the current state, logging when the weather panel goes away.
    pub fn render(&mut self) -> String {
        let mounted = views::shows_weather(&self.state);
        if self.weather_mounted && !mounted {
            tracing::debug!("Weather view unmounting");
        }
        if mounted {
            tracing::trace!(days = ?self.state.forecast_days(), "Rendering weather");
        }
        self.weather_mounted = mounted;

        views::render_app(&self.state)
    }

    async fn draw<W: AsyncWrite + Unpin>(&mut self, output: &mut W) -> Result<(), AppError> {
        let frame = format!("\n{}", self.render());
        output.write_all(frame.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }

    /// Run until `:quit` or end of input.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        output
            .write_all(format!("{}\n", views::HELP).as_bytes())
            .await?;
        self.initialize();
        self.draw(&mut output).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    match Command::parse(&line) {
                        Command::Quit => break,
                        Command::Get => {
                            self.request_fetch();
                        }
                        Command::Edit(text) => {
                            self.set_location(text);
                        }
                    }
                }
                Some(event) = self.events_rx.recv() => {
                    if !self.handle_event(event) {
                        continue;
                    }
                }
            }

            self.draw(&mut output).await?;
        }

        tracing::info!("Shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use classy_weather::{DailySeries, ForecastRequest, GeocodeResult, WeatherError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct FakeSource {
        geocode_calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl WeatherSource for FakeSource {
        async fn geocode(&self, name: &str) -> Result<Vec<GeocodeResult>, WeatherError> {
            self.geocode_calls.fetch_add(1, Ordering::SeqCst);
            let (place, country, tz) = match name {
                "lisbon" => ("Lisbon", "PT", "Europe/Lisbon"),
                "porto" => ("Porto", "PT", "Europe/Lisbon"),
                "berlin" => ("Berlin", "DE", "Europe/Berlin"),
                _ => return Ok(Vec::new()),
            };
            Ok(vec![GeocodeResult {
                name: place.to_string(),
                latitude: 1.0,
                longitude: 2.0,
                timezone: Some(tz.to_string()),
                country_code: Some(country.to_string()),
            }])
        }

        async fn forecast(&self, _request: &ForecastRequest) -> Result<DailySeries, WeatherError> {
            Ok(DailySeries {
                time: vec!["2024-01-01".into(), "2024-01-02".into(), "2024-01-03".into()],
                weather_code: vec![Some(0), Some(3), Some(61)],
                temperature_max: vec![Some(15.0), Some(16.0), Some(17.0)],
                temperature_min: vec![Some(5.0), Some(6.0), Some(7.0)],
            })
        }
    }

    /// Apply events until `request` finishes.
    async fn settle(app: &mut WeatherApp<FakeSource>, request: RequestId) {
        while let Some(event) = app.next_event().await {
            let done = matches!(
                event,
                FetchEvent::Finished(r) | FetchEvent::Cleared(r) if r == request
            );
            app.handle_event(event);
            if done {
                break;
            }
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn test_restart_restores_location_and_fetches_once() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).save_location("lisbon").unwrap();

        let source = FakeSource::default();
        let calls = Arc::clone(&source.geocode_calls);
        let mut app = WeatherApp::new(source, store_in(&dir));

        let request = app.initialize();
        settle(&mut app, request).await;

        assert_eq!(app.state().location_query(), "lisbon");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.state().forecast_days().len(), 3);
        assert_eq!(app.state().resolved_display_name(), Some("Lisbon 🇵🇹"));
    }

    #[tokio::test]
    async fn test_first_run_starts_empty_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource::default();
        let calls = Arc::clone(&source.geocode_calls);
        let mut app = WeatherApp::new(source, store_in(&dir));

        let request = app.initialize();
        settle(&mut app, request).await;

        assert_eq!(app.state().location_query(), "");
        assert!(app.state().forecast_days().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_edit_persists_and_fetches() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = WeatherApp::new(FakeSource::default(), store_in(&dir));

        let request = app.set_location("berlin").unwrap();
        settle(&mut app, request).await;

        assert_eq!(store_in(&dir).load_location().unwrap(), "berlin");
        assert_eq!(app.state().resolved_display_name(), Some("Berlin 🇩🇪"));
        assert!(app.set_location("berlin").is_none(), "unchanged text does not refetch");
    }

    #[tokio::test]
    async fn test_newer_search_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = WeatherApp::new(FakeSource::default(), store_in(&dir));

        app.set_location("lisbon");
        let latest = app.set_location("porto").unwrap();
        settle(&mut app, latest).await;

        assert_eq!(app.state().resolved_display_name(), Some("Porto 🇵🇹"));
        assert!(!app.state().is_loading());
    }

    #[tokio::test]
    async fn test_render_tracks_weather_panel() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = WeatherApp::new(FakeSource::default(), store_in(&dir));

        let request = app.set_location("lisbon").unwrap();
        settle(&mut app, request).await;
        let frame = app.render();
        assert!(frame.contains("Weather in Lisbon 🇵🇹"));
        assert!(frame.contains("Today"));

        let request = app.set_location("l").unwrap();
        settle(&mut app, request).await;
        let frame = app.render();
        assert!(!frame.contains("Weather in"));
    }

    #[tokio::test]
    async fn test_run_reads_commands() {
        let dir = tempfile::tempdir().unwrap();
        let app = WeatherApp::new(FakeSource::default(), store_in(&dir));
        let input: &[u8] = b"porto\n:quit\nberlin\n";
        let mut output = Vec::new();

        app.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(views::TITLE));
        assert!(text.contains("[ porto ]"));
        assert!(!text.contains("[ berlin ]"));
        assert_eq!(store_in(&dir).load_location().unwrap(), "porto");
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse(":get"), Command::Get);
        assert_eq!(Command::parse(" :quit "), Command::Quit);
        assert_eq!(Command::parse(":q"), Command::Edit(":q".into()));
        assert_eq!(Command::parse("new york"), Command::Edit("new york".into()));
        assert_eq!(Command::parse(""), Command::Edit(String::new()));
    }
}
