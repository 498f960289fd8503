//! Roadie - an in-car dashboard for the terminal
//!
//! Roadie shows the time, local weather, a week forecast, past trips and
//! nearby attractions, and sends trip plans to a route planning service.

pub mod app;
pub mod config;
pub mod data;
pub mod services;
pub mod theme;
pub mod ui;

pub use app::{App, LaunchOptions};
pub use config::Config;
pub use theme::Theme;
