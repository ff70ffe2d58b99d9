//! Sorting algorithms compiled to step runs
//!
//! Each submodule exposes a pure `generate(&[i32]) -> Run` function:
//! - [`bubble`]: adjacent compare-and-swap passes
//! - [`selection`]: minimum scan, one swap per pass
//! - [`merge`]: top-down merge over two alternating buffers
//! - [`quick`]: Lomuto partition with the last element as pivot
//! - [`heap`]: bottom-up max-heap, then repeated root extraction
//!
//! # Emission rules
//!
//! Every comparison is one step. Every mutation is two steps carrying the
//! same swap highlight: the array before the mutation, then after it.
//! Bubble, selection and heap sort grow the `sorted` set as positions are
//! finalized; merge and quick sort only mark it in the closing step.
//!
//! Generators never touch the caller's slice and use strict ordering, so
//! equal values are never swapped.

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod selection;

use crate::snapshot::Run;
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

/// Signature shared by every step generator
pub type Generator = fn(&[i32]) -> Run;

/// The sorting algorithms that can be visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Algorithm {
    #[default]
    #[value(name = "bubble")]
    BubbleSort,
    #[value(name = "selection")]
    SelectionSort,
    #[value(name = "merge")]
    MergeSort,
    #[value(name = "quick")]
    QuickSort,
    #[value(name = "heap")]
    HeapSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::HeapSort => "Heap Sort",
        }
    }

    /// Step generator for this algorithm
    pub fn generator(self) -> Generator {
        match self {
            Algorithm::BubbleSort => bubble::generate,
            Algorithm::SelectionSort => selection::generate,
            Algorithm::MergeSort => merge::generate,
            Algorithm::QuickSort => quick::generate,
            Algorithm::HeapSort => heap::generate,
        }
    }

    /// Compile `input` into a run of steps
    pub fn generate(self, input: &[i32]) -> Run {
        let run = (self.generator())(input);
        debug!(
            algorithm = self.name(),
            len = input.len(),
            steps = run.len(),
            "generated run"
        );
        run
    }

    /// Cycle forward through [`Algorithm::ALL`]
    pub fn next(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::SelectionSort,
            Algorithm::SelectionSort => Algorithm::MergeSort,
            Algorithm::MergeSort => Algorithm::QuickSort,
            Algorithm::QuickSort => Algorithm::HeapSort,
            Algorithm::HeapSort => Algorithm::BubbleSort,
        }
    }

    /// Cycle backward through [`Algorithm::ALL`]
    pub fn prev(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::HeapSort,
            Algorithm::SelectionSort => Algorithm::BubbleSort,
            Algorithm::MergeSort => Algorithm::SelectionSort,
            Algorithm::QuickSort => Algorithm::MergeSort,
            Algorithm::HeapSort => Algorithm::QuickSort,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
