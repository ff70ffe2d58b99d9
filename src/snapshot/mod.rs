//! Step snapshots and the run history they form
//!
//! - [`Step`]: one frame of a sort, holding its own copy of the array
//! - [`Highlight`]: which indices the frame singles out
//! - [`Run`]: the full, immutable step sequence of one algorithm invocation

use rustc_hash::FxHashSet;

/// Indices singled out by a step.
///
/// A step is either a comparison or a mutation, never both, so the two
/// highlight kinds share one enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Read-only comparison between two indices (may name the same index twice)
    Compare(usize, usize),
    /// Swap or overwrite touching two indices
    Swap(usize, usize),
}

/// How the renderer should treat a single index of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Idle,
    Comparing,
    Swapping,
    Sorted,
}

/// Snapshot of the array at one point of a sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<i32>,
    pub highlight: Highlight,
    pub sorted: FxHashSet<usize>,
}

impl Step {
    /// A frame with nothing highlighted and nothing sorted
    pub fn plain(array: &[i32]) -> Self {
        Step {
            array: array.to_vec(),
            highlight: Highlight::None,
            sorted: FxHashSet::default(),
        }
    }

    /// The pair of indices being compared, if this is a comparison step
    pub fn comparing(&self) -> Option<(usize, usize)> {
        match self.highlight {
            Highlight::Compare(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// The pair of indices being swapped or written, if this is a mutation step
    pub fn swapping(&self) -> Option<(usize, usize)> {
        match self.highlight {
            Highlight::Swap(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// Role of `index` in this frame. Sorted wins over swapping, which wins
    /// over comparing.
    pub fn role(&self, index: usize) -> BarRole {
        if self.is_sorted(index) {
            return BarRole::Sorted;
        }
        match self.highlight {
            Highlight::Swap(a, b) if index == a || index == b => BarRole::Swapping,
            Highlight::Compare(a, b) if index == a || index == b => BarRole::Comparing,
            _ => BarRole::Idle,
        }
    }
}

/// Complete step history for one algorithm run over one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    steps: Vec<Step>,
}

impl Run {
    pub fn new(steps: Vec<Step>) -> Self {
        Run { steps }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of comparison steps
    pub fn comparisons(&self) -> usize {
        self.steps.iter().filter(|s| s.comparing().is_some()).count()
    }

    /// Number of mutations (each spans two swap steps)
    pub fn mutations(&self) -> usize {
        self.steps.iter().filter(|s| s.swapping().is_some()).count() / 2
    }

    /// Rough memory footprint of the stored arrays in bytes
    pub fn estimated_size(&self) -> usize {
        self.steps
            .iter()
            .map(|step| {
                step.array.len() * std::mem::size_of::<i32>()
                    + step.sorted.len() * std::mem::size_of::<usize>()
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
