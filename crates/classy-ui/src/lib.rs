//! Presentation and orchestration for Classy Weather.
//!
//! `ViewState` is owned by the app; lookups run as tasks and report back
//! through `FetchEvent`s which the app applies on its own task.

pub mod app;
pub mod services;
pub mod state;
pub mod views;

pub use app::WeatherApp;
pub use services::weather_service::ForecastOrchestrator;
pub use state::{FetchEvent, FetchSink, RequestId, ViewState};
