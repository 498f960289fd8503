//! Layout utilities and pointer hit-testing

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
};

use crate::app::form::Field;
use crate::app::scroll::Viewport;
use crate::app::state::{SectionId, UserStatus};

/// Something the pointer can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Full-screen backdrop
    Background,
    /// A status toggle bound to its target status
    StatusButton(UserStatus),
    Field(Field),
    OriginToggle,
    Submit,
    /// Content area of a menu section
    Section(SectionId),
    /// The alert popup
    Notice,
    /// Return from the directions screen
    Back,
}

/// Regions drawn in the last frame, topmost last
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
    viewports: Vec<(SectionId, Viewport)>,
}

impl HitMap {
    /// Register a clickable region on top of everything registered so far
    pub fn register(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the pointer
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions.iter().rev().find(|(area, _)| area.contains(position)).map(|(_, t)| *t)
    }

    /// Area of the topmost region for `target`
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.regions.iter().rev().find(|(_, t)| *t == target).map(|(area, _)| *area)
    }

    /// Record the rendered size of a scrollable section
    pub fn measure(&mut self, section: SectionId, viewport: Viewport) {
        self.viewports.retain(|(id, _)| *id != section);
        self.viewports.push((section, viewport));
    }

    pub fn viewports(&self) -> impl Iterator<Item = (SectionId, Viewport)> + '_ {
        self.viewports.iter().copied()
    }
}

/// A rectangle of at most `width` x `height` centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Pad a line with spaces on the right to exactly `width` columns
pub fn pad_line(mut line: Line<'static>, width: u16) -> Line<'static> {
    let current = line.width();
    if current < usize::from(width) {
        line.spans.push(Span::raw(" ".repeat(usize::from(width) - current)));
    }
    line
}

/// Center `text` within `width` columns
pub fn center_text(text: &str, width: u16) -> String {
    let len = text.chars().count();
    let width = usize::from(width);
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}

/// Truncate `text` to `width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
