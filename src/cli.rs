//! Command-line arguments

use crate::algorithms::Algorithm;
use crate::config::{
    Config, DEFAULT_ARRAY_SIZE, DEFAULT_CUSTOM_INPUT, DEFAULT_SPEED, MAX_ARRAY_SIZE, MAX_SPEED,
    MIN_ARRAY_SIZE, MIN_SPEED,
};
use crate::input::ArrayKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sortty")]
#[command(about = "Step through sorting algorithms in the terminal", version)]
pub struct Cli {
    /// Algorithm selected at startup
    #[arg(short, long, value_enum, default_value_t = Algorithm::BubbleSort, env = "SORTTY_ALGORITHM")]
    pub algorithm: Algorithm,

    /// How the initial array is generated
    #[arg(short, long, value_enum, default_value_t = ArrayKind::Random, env = "SORTTY_KIND")]
    pub kind: ArrayKind,

    /// Number of elements for generated arrays
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_ARRAY_SIZE,
        value_parser = parse_size,
        env = "SORTTY_SIZE"
    )]
    pub size: usize,

    /// Playback speed in steps per second
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u32).range(MIN_SPEED as i64..=MAX_SPEED as i64),
        env = "SORTTY_SPEED"
    )]
    pub speed: u32,

    /// Comma-separated array used by the custom kind (implies --kind custom)
    #[arg(short, long, env = "SORTTY_CUSTOM")]
    pub custom: Option<String>,

    /// Seed for reproducible generated arrays
    #[arg(long, env = "SORTTY_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long, env = "SORTTY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Print a summary of the run and exit instead of opening the TUI
    #[arg(long)]
    pub summary: bool,
}

fn parse_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("'{}' is not a valid size", raw))?;
    if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "size must be between {} and {}",
            MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
        ))
    }
}

impl Cli {
    pub fn into_config(self) -> Config {
        let kind = if self.custom.is_some() {
            ArrayKind::Custom
        } else {
            self.kind
        };

        Config {
            algorithm: self.algorithm,
            kind,
            size: self.size,
            speed: self.speed,
            custom_input: self
                .custom
                .unwrap_or_else(|| DEFAULT_CUSTOM_INPUT.to_string()),
            seed: self.seed,
            log_file: self.log_file,
            summary: self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Cli::try_parse_from(["sortty"]).unwrap().into_config();
        assert_eq!(config.algorithm, Algorithm::BubbleSort);
        assert_eq!(config.kind, ArrayKind::Random);
        assert_eq!(config.size, DEFAULT_ARRAY_SIZE);
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert!(!config.summary);
    }

    #[test]
    fn test_custom_implies_custom_kind() {
        let config = Cli::try_parse_from(["sortty", "--custom", "5,4,3,2,1", "-a", "heap"])
            .unwrap()
            .into_config();
        assert_eq!(config.kind, ArrayKind::Custom);
        assert_eq!(config.algorithm, Algorithm::HeapSort);
        assert_eq!(config.custom_input, "5,4,3,2,1");
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Cli::try_parse_from(["sortty", "--speed", "0"]).is_err());
        assert!(Cli::try_parse_from(["sortty", "--speed", "201"]).is_err());
        assert!(Cli::try_parse_from(["sortty", "--size", "4"]).is_err());
        assert!(Cli::try_parse_from(["sortty", "--size", "151"]).is_err());
    }
}
