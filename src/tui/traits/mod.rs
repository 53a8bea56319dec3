//! Component trait system for TUI architecture
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to draw or hit-test every panel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  App / InputController                      │
//! │     (orchestrator: routes key and mouse events)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!      ┌──────────────┐ ┌──────────────┐ ┌──────────┐
//!      │ Autocomplete │ │ SelectionList│ │   Logs   │
//!      └──────────────┘ └──────────────┘ └──────────┘
//! ```
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Clickable`] - Components that map a mouse position to a target
//! - [`Interactive`] - Components that handle keyboard input

mod clickable;
mod component;
mod interactive;

pub use clickable::Clickable;
pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
