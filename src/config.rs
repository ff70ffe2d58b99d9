//! Limits, defaults and the resolved startup configuration

use crate::algorithms::Algorithm;
use crate::input::ArrayKind;
use std::path::PathBuf;

pub const DEFAULT_ARRAY_SIZE: usize = 50;
pub const MIN_ARRAY_SIZE: usize = 5;
pub const MAX_ARRAY_SIZE: usize = 150;

/// Steps per second
pub const DEFAULT_SPEED: u32 = 50;
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 200;

pub const MIN_VALUE: i32 = -65536;
pub const MAX_VALUE: i32 = 65535;

pub const DEFAULT_CUSTOM_INPUT: &str = "8, 3, 10, 1, 6, 14, 4, 7, 13, 20, 18, 15";

/// Settings the application starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub kind: ArrayKind,
    pub size: usize,
    pub speed: u32,
    pub custom_input: String,
    /// Fixed RNG seed for reproducible arrays
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    /// Print a run summary instead of opening the TUI
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::default(),
            kind: ArrayKind::default(),
            size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
            custom_input: DEFAULT_CUSTOM_INPUT.to_string(),
            seed: None,
            log_file: None,
            summary: false,
        }
    }
}
