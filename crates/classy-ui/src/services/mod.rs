pub mod weather_service;
