//! # Introduction
//!
//! Sortty compiles sorting algorithms into a precomputed sequence of steps
//! (which indices are compared, which are swapped, which are already in
//! place) and plays that sequence back in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui): play, pause, single-step in both
//! directions, and change speed while it runs.
//!
//! ## Pipeline
//!
//! ```text
//! Input array → Step generator → Run → Playback controller → TUI
//! ```
//!
//! 1. [`input`]: generated (random, nearly sorted, reversed, duplicates) or
//!    parsed custom arrays, validated against the limits in [`config`].
//! 2. [`algorithms`]: one pure generator per algorithm producing a
//!    [`snapshot::Run`].
//! 3. [`snapshot`]: [`snapshot::Step`] frames and the immutable run.
//! 4. [`playback`]: the single-timer state machine that moves a cursor
//!    through the run.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble sort, selection sort, merge sort, quick sort (Lomuto), heap sort.

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod playback;
pub mod snapshot;
pub mod ui;
