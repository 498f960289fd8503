//! Terminal glyphs for icon names

/// Glyph for an icon name; unknown names get a bullet
pub fn glyph(name: &str) -> &'static str {
    match name {
        // Weather
        "sun" => "☼",
        "clouds" => "☁",
        "cloud-drizzle" => "☂",
        "cloud-bolt" => "↯",
        // Sections
        "history" => "↺",
        "camera" => "◉",
        // Attractions
        "galaxy" => "✦",
        "hat-wizard" => "▲",
        "broom-ball" => "●",
        "starship-freighter" => "◆",
        // Controls
        "hand-peace" => "✌",
        "arrow-right" => "→",
        "arrow-left" => "←",
        "check" => "✓",
        "sign-in" => "⇥",
        "sign-out" => "⇤",
        _ => "•",
    }
}
