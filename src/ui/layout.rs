//! Responsive layout
//!
//! `LayoutContext` wraps the terminal size and decides whether the roster
//! and timeline sit side by side or stacked.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this the roster and timeline are stacked
    pub const SM_WIDTH: u16 = 80;
    /// Below this the footer shows only the essential hints
    pub const XS_WIDTH: u16 = 60;
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the terminal, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Split the body into (roster, timeline).
    pub fn split_body(&self, body: Rect) -> (Rect, Rect) {
        if self.should_stack_panels() {
            let roster_height = (body.height / 3).max(5);
            let [roster, timeline] = Layout::vertical([
                Constraint::Length(roster_height),
                Constraint::Min(0),
            ])
            .areas(body);
            (roster, timeline)
        } else {
            let roster_width = self.bounded_width(35, 30, 50);
            let [roster, timeline] = Layout::horizontal([
                Constraint::Length(roster_width),
                Constraint::Min(0),
            ])
            .areas(body);
            (roster, timeline)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(35), 35);
        assert_eq!(LayoutContext::new(1, 1).percent_width(10), 1);
    }

    #[test]
    fn test_bounded_width() {
        assert_eq!(LayoutContext::new(200, 40).bounded_width(35, 30, 50), 50);
        assert_eq!(LayoutContext::new(80, 40).bounded_width(35, 30, 50), 30);
    }

    #[test]
    fn test_split_side_by_side() {
        let ctx = LayoutContext::new(120, 40);
        let (roster, timeline) = ctx.split_body(Rect::new(0, 0, 120, 30));
        assert_eq!(roster.width, 42);
        assert_eq!(timeline.x, 42);
        assert_eq!(roster.height, timeline.height);
    }

    #[test]
    fn test_split_stacked_when_narrow() {
        let ctx = LayoutContext::new(70, 40);
        assert!(ctx.should_stack_panels());
        let (roster, timeline) = ctx.split_body(Rect::new(0, 0, 70, 30));
        assert_eq!(roster.width, 70);
        assert_eq!(roster.height, 10);
        assert_eq!(timeline.y, 10);
    }
}
