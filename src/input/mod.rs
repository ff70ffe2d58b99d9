//! Input arrays for the visualizer
//!
//! Produces the arrays fed to the step generators, either synthesized by
//! [`generate_array`] or parsed from user text by [`parse_custom`]. Anything
//! leaving this module is already within the value and size limits from
//! [`crate::config`], so the generators do not re-validate.

use crate::config::{MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE};
use crate::error::InputError;
use clap::ValueEnum;
use rand::Rng;
use std::fmt;

/// Shape of the array to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArrayKind {
    #[default]
    Random,
    NearlySorted,
    Reversed,
    WithDuplicates,
    /// Parsed from user text
    Custom,
}

impl ArrayKind {
    pub const ALL: [ArrayKind; 5] = [
        ArrayKind::Random,
        ArrayKind::NearlySorted,
        ArrayKind::Reversed,
        ArrayKind::WithDuplicates,
        ArrayKind::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArrayKind::Random => "Random",
            ArrayKind::NearlySorted => "Nearly Sorted",
            ArrayKind::Reversed => "Reversed",
            ArrayKind::WithDuplicates => "With Duplicates",
            ArrayKind::Custom => "Custom",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ArrayKind::Random => ArrayKind::NearlySorted,
            ArrayKind::NearlySorted => ArrayKind::Reversed,
            ArrayKind::Reversed => ArrayKind::WithDuplicates,
            ArrayKind::WithDuplicates => ArrayKind::Custom,
            ArrayKind::Custom => ArrayKind::Random,
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build an array of `size` elements shaped by `kind`.
///
/// Returns `None` for [`ArrayKind::Custom`], which only comes from
/// [`parse_custom`].
pub fn generate_array<R: Rng + ?Sized>(
    kind: ArrayKind,
    size: usize,
    rng: &mut R,
) -> Option<Vec<i32>> {
    let array = match kind {
        ArrayKind::Random => random(size, rng),
        ArrayKind::NearlySorted => nearly_sorted(size, rng),
        ArrayKind::Reversed => reversed(size),
        ArrayKind::WithDuplicates => with_duplicates(size, rng),
        ArrayKind::Custom => return None,
    };
    Some(array)
}

fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

/// Value at `position` on an even ramp from MIN_VALUE to MAX_VALUE over `size` slots
fn ramp(position: usize, size: usize) -> i32 {
    let span = f64::from(MAX_VALUE) - f64::from(MIN_VALUE);
    let fraction = position as f64 / size.saturating_sub(1).max(1) as f64;
    (fraction * span).floor() as i32 + MIN_VALUE
}

fn nearly_sorted<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i32> {
    let mut array: Vec<i32> = (0..size).map(|i| ramp(i, size)).collect();
    if size == 0 {
        return array;
    }
    for _ in 0..size / 10 {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        array.swap(a, b);
    }
    array
}

fn reversed(size: usize) -> Vec<i32> {
    (0..size).map(|i| ramp(size - 1 - i, size)).collect()
}

fn with_duplicates<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i32> {
    let pool = random((size / 4).max(5), rng);
    (0..size).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

/// Array for `kind`: parsed from `custom` for [`ArrayKind::Custom`],
/// generated with `size` elements otherwise
pub fn build_array<R: Rng + ?Sized>(
    kind: ArrayKind,
    size: usize,
    custom: &str,
    rng: &mut R,
) -> Result<Vec<i32>, InputError> {
    match generate_array(kind, size, rng) {
        Some(array) => Ok(array),
        None => parse_custom(custom),
    }
}

/// Parse a comma-separated list of integers within the configured limits
pub fn parse_custom(text: &str) -> Result<Vec<i32>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let values = trimmed
        .split(',')
        .map(parse_value)
        .collect::<Result<Vec<i32>, InputError>>()?;

    if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&values.len()) {
        return Err(InputError::InvalidSize { len: values.len() });
    }
    Ok(values)
}

fn parse_value(part: &str) -> Result<i32, InputError> {
    let token = part.trim();
    if token.is_empty() {
        return Err(InputError::EmptyValue);
    }

    let value = match token.parse::<i64>() {
        Ok(value) => value,
        // Accept integral decimals such as "4.0"
        Err(_) => match token.parse::<f64>() {
            Ok(float) if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e15 => {
                float as i64
            }
            _ => {
                return Err(InputError::InvalidNumber {
                    token: token.to_string(),
                })
            }
        },
    };

    if value < i64::from(MIN_VALUE) || value > i64::from(MAX_VALUE) {
        return Err(InputError::OutOfRange { value });
    }
    Ok(value as i32)
}
