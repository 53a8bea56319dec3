//! Clickable trait for components that respond to mouse clicks
//!
//! The terminal reports clicks as cell positions. A clickable component
//! resolves a position inside the area it was last drawn in to whatever the
//! click means for it (a dropdown row, a remove control).

use super::Component;
use ratatui::layout::{Position, Rect};

pub trait Clickable: Component {
    /// What a click on this component resolves to
    type Target;

    /// Resolve a click at `position`, given the area the component occupies
    ///
    /// Returns `None` when the position hits nothing actionable.
    fn hit_test(&self, area: Rect, position: Position) -> Option<Self::Target>;
}
