//! Drag-to-scroll state for horizontally scrollable sections
//!
//! Press grabs the strip, moving pans it, release or leaving the region
//! stops. The offset is always kept within `[0, max_scroll]`.

/// Clamp `value` into `[min, max]`
pub fn clamp(min: i32, value: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Measured size of a scrollable region, in columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Width of the full content strip
    pub content_width: u16,
    /// Width of the visible window onto it
    pub viewport_width: u16,
}

impl Viewport {
    pub fn new(content_width: u16, viewport_width: u16) -> Self {
        Self { content_width, viewport_width }
    }

    /// Largest valid scroll offset
    pub fn max_scroll(&self) -> u16 {
        self.content_width.saturating_sub(self.viewport_width)
    }
}

/// Where a grab started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchor {
    /// Pointer column at the press
    pub pointer_x: u16,
    /// Scroll offset at the press
    pub offset_at_grab: u16,
}

/// Drag-scroll state owned by one scrollable section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragScroll {
    grabbing: bool,
    anchor: Anchor,
    offset: u16,
    /// `None` until the region has been rendered once
    viewport: Option<Viewport>,
}

impl DragScroll {
    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Current horizontal scroll offset
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Largest valid offset; zero while the region is not measured
    pub fn max_scroll(&self) -> u16 {
        self.viewport.map(|v| v.max_scroll()).unwrap_or(0)
    }

    /// Pointer pressed at column `x`
    pub fn grab(&mut self, x: u16) {
        self.grabbing = true;
        self.anchor = Anchor { pointer_x: x, offset_at_grab: self.offset };
    }

    /// Pointer moved to column `x`; returns whether the offset changed
    pub fn drag(&mut self, x: u16) -> bool {
        if !self.grabbing {
            return false;
        }
        let delta = i32::from(self.anchor.pointer_x) - i32::from(x);
        let target = i32::from(self.anchor.offset_at_grab) + delta;
        self.set_offset(target)
    }

    /// Pointer released or left the region; no-op when not grabbing
    pub fn release(&mut self) -> bool {
        if !self.grabbing {
            return false;
        }
        self.grabbing = false;
        true
    }

    /// Scroll by `delta` columns (keyboard)
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.set_offset(i32::from(self.offset) + delta)
    }

    /// Record the rendered size, re-clamping the offset if the content shrank
    pub fn measure(&mut self, viewport: Viewport) -> bool {
        if self.viewport == Some(viewport) {
            return false;
        }
        self.viewport = Some(viewport);
        self.set_offset(i32::from(self.offset));
        true
    }

    fn set_offset(&mut self, target: i32) -> bool {
        let clamped = clamp(0, target, i32::from(self.max_scroll())) as u16;
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn measured(content: u16, viewport: u16) -> DragScroll {
        let mut scroll = DragScroll::default();
        scroll.measure(Viewport::new(content, viewport));
        scroll
    }

    #[test]
    fn dragging_left_scrolls_right() {
        let mut scroll = measured(100, 40);
        scroll.grab(30);
        assert!(scroll.drag(20));
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn drag_clamps_at_both_ends() {
        let mut scroll = measured(100, 40);
        scroll.grab(50);
        scroll.drag(0);
        assert_eq!(scroll.offset(), 50);
        scroll.drag(u16::MAX);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn drag_uses_offset_at_grab_time() {
        let mut scroll = measured(100, 40);
        scroll.grab(30);
        scroll.drag(20);
        scroll.release();

        scroll.grab(30);
        scroll.drag(25);
        assert_eq!(scroll.offset(), 15);
        assert_eq!(scroll.anchor(), Anchor { pointer_x: 30, offset_at_grab: 10 });
    }

    #[test]
    fn move_without_grab_is_noop() {
        let mut scroll = measured(100, 40);
        assert!(!scroll.drag(10));
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn release_without_grab_is_noop() {
        let mut scroll = measured(100, 40);
        assert!(!scroll.release());
        assert_eq!(scroll, measured(100, 40));
    }

    #[test]
    fn unmeasured_region_never_moves() {
        let mut scroll = DragScroll::default();
        scroll.grab(10);
        assert!(!scroll.drag(0));
        assert!(!scroll.scroll_by(5));
        assert_eq!(scroll.offset(), 0);
        assert!(scroll.release());
    }

    #[test]
    fn shrinking_content_reclamps() {
        let mut scroll = measured(100, 40);
        scroll.scroll_by(60);
        assert_eq!(scroll.offset(), 60);

        scroll.measure(Viewport::new(60, 40));
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn content_narrower_than_viewport() {
        let mut scroll = measured(20, 40);
        scroll.grab(30);
        scroll.drag(0);
        assert_eq!(scroll.offset(), 0);
    }

    #[derive(Debug, Clone)]
    enum Pointer {
        Down(u16),
        Move(u16),
        Up,
        Leave,
    }

    fn pointer() -> impl Strategy<Value = Pointer> {
        prop_oneof![
            (0u16..300).prop_map(Pointer::Down),
            (0u16..300).prop_map(Pointer::Move),
            Just(Pointer::Up),
            Just(Pointer::Leave),
        ]
    }

    proptest! {
        #[test]
        fn offset_stays_within_bounds(
            content in 0u16..400,
            viewport in 0u16..200,
            events in proptest::collection::vec(pointer(), 0..64),
        ) {
            let mut scroll = measured(content, viewport);
            let max = content.saturating_sub(viewport);
            for event in events {
                match event {
                    Pointer::Down(x) => scroll.grab(x),
                    Pointer::Move(x) => { scroll.drag(x); }
                    Pointer::Up | Pointer::Leave => { scroll.release(); }
                }
                prop_assert!(scroll.offset() <= max);
            }
        }

        #[test]
        fn release_when_idle_changes_nothing(content in 0u16..400, viewport in 0u16..200, by in -50i32..50) {
            let mut scroll = measured(content, viewport);
            scroll.scroll_by(by);
            let before = scroll.clone();
            scroll.release();
            prop_assert_eq!(scroll, before);
        }
    }
}
