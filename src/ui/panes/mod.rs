//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`controls`]: Settings header with the algorithm, array kind, size, speed
//!   and the custom array line
//! - [`bars`]: The array itself, one coloured bar per element
//! - [`status`]: Status bar with step counter, keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function and the
//! `*RenderData` struct it reads from. Panes hold no state of their own.

pub mod bars;
pub mod controls;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use controls::{render_controls_pane, ControlsRenderData};
pub use status::{render_status_bar, StatusRenderData};
