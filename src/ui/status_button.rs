//! Sign-in and sign-out buttons

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::icons;
use super::layout::{HitMap, Target};
use crate::app::state::UserStatus;
use crate::theme::Theme;

/// A button that moves the shared status to `target`
#[derive(Debug, Clone, Copy)]
pub struct StatusButton {
    pub target: UserStatus,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SIGN_IN: StatusButton =
    StatusButton { target: UserStatus::LoggedIn, label: "Sign in", icon: "sign-in" };

pub const SIGN_OUT: StatusButton =
    StatusButton { target: UserStatus::LoggedOut, label: "Sign out", icon: "sign-out" };

impl StatusButton {
    /// Disabled while the status already equals the target
    pub fn is_enabled(&self, current: UserStatus) -> bool {
        current != self.target
    }

    pub fn text(&self) -> String {
        format!(" {} {} ", icons::glyph(self.icon), self.label)
    }

    /// Rendered width in columns
    pub fn width(&self) -> u16 {
        self.text().chars().count() as u16
    }
}

/// Draw `button` and register it for clicks
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    button: &StatusButton,
    current: UserStatus,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let style = if button.is_enabled(current) {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted).bg(theme.bg_tertiary)
    };
    let area = Rect { width: area.width.min(button.width()), height: area.height.min(1), ..area };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(button.text(), style))), area);
    hits.register(area, Target::StatusButton(button.target));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_disable_at_their_target() {
        assert!(SIGN_IN.is_enabled(UserStatus::LoggedOut));
        assert!(SIGN_IN.is_enabled(UserStatus::LoggingIn));
        assert!(!SIGN_IN.is_enabled(UserStatus::LoggedIn));

        assert!(SIGN_OUT.is_enabled(UserStatus::LoggedIn));
        assert!(!SIGN_OUT.is_enabled(UserStatus::LoggedOut));
    }

    #[test]
    fn width_matches_text() {
        assert_eq!(SIGN_IN.width() as usize, SIGN_IN.text().chars().count());
    }
}
