//! Theming system for roadie

mod tokyo_night;

pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::data::WeatherType;

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Weather
    pub weather_sunny: Color,
    pub weather_cloudy: Color,
    pub weather_rainy: Color,
    pub weather_stormy: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Theme {
    /// Color used for a weather type's icon
    pub fn weather_color(&self, weather: WeatherType) -> Color {
        match weather {
            WeatherType::Sunny => self.weather_sunny,
            WeatherType::Cloudy => self.weather_cloudy,
            WeatherType::Rainy => self.weather_rainy,
            WeatherType::Stormy => self.weather_stormy,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Tokyo Night");
    }

    #[test]
    fn weather_types_have_distinct_colors() {
        let theme = Theme::default();
        assert_ne!(theme.weather_color(WeatherType::Sunny), theme.weather_color(WeatherType::Rainy));
        assert_ne!(
            theme.weather_color(WeatherType::Cloudy),
            theme.weather_color(WeatherType::Stormy)
        );
    }
}
