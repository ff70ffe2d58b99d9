//! Step recording shared by every generator
//!
//! [`Recorder`] owns the growing step list and the incremental `sorted` set.
//! Generators call it instead of building [`Step`]s by hand so that every
//! mutation is emitted as the same two-frame pair.

use crate::snapshot::{Highlight, Run, Step};
use rustc_hash::FxHashSet;

#[derive(Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
    sorted: FxHashSet<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run for inputs that are sorted by definition (length 0 or 1)
    pub fn trivial(input: &[i32]) -> Option<Run> {
        if input.len() > 1 {
            return None;
        }
        let mut step = Step::plain(input);
        step.sorted.extend(0..input.len());
        Some(Run::new(vec![step]))
    }

    fn push(&mut self, array: &[i32], highlight: Highlight) {
        self.steps.push(Step {
            array: array.to_vec(),
            highlight,
            sorted: self.sorted.clone(),
        });
    }

    /// Record a comparison between `a` and `b`
    pub fn compare(&mut self, array: &[i32], a: usize, b: usize) {
        self.push(array, Highlight::Compare(a, b));
    }

    /// Exchange `a` and `b`, recording the frame before and after
    pub fn swap(&mut self, array: &mut [i32], a: usize, b: usize) {
        self.push(array, Highlight::Swap(a, b));
        array.swap(a, b);
        self.push(array, Highlight::Swap(a, b));
    }

    /// Overwrite `array[dest]` with `value` read from `source` in another buffer
    pub fn write(&mut self, array: &mut [i32], dest: usize, source: usize, value: i32) {
        self.push(array, Highlight::Swap(dest, source));
        array[dest] = value;
        self.push(array, Highlight::Swap(dest, source));
    }

    pub fn mark_sorted(&mut self, index: usize) {
        self.sorted.insert(index);
    }

    /// Close the run with a frame that marks every index sorted
    pub fn finish(mut self, array: &[i32]) -> Run {
        self.sorted.extend(0..array.len());
        self.push(array, Highlight::None);
        Run::new(self.steps)
    }
}
