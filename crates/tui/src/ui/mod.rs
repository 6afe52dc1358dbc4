//! UI building blocks for the alert.
//!
//! This module contains the visual tree, its geometry and the rendering
//! logic, kept separate from the controller's state management.

pub mod layout;
pub mod render;
pub mod theme;
pub mod views;

pub use layout::{AlertLayout, wrap_text};
pub use render::render_alert;
pub use views::{ActionButton, AlertViews, ButtonId, ButtonRow, ContainerView, Label, Separator};
