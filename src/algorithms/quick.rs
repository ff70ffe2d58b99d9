//! Quick sort step generator (Lomuto partition, last element as pivot)

use super::recorder::Recorder;
use crate::snapshot::Run;

pub fn generate(input: &[i32]) -> Run {
    if let Some(run) = Recorder::trivial(input) {
        return run;
    }

    let mut array = input.to_vec();
    let mut rec = Recorder::new();
    let high = array.len() - 1;

    sort_range(&mut array, 0, high, &mut rec);

    rec.finish(&array)
}

fn sort_range(array: &mut [i32], low: usize, high: usize, rec: &mut Recorder) {
    if low >= high {
        return;
    }
    let pivot = partition(array, low, high, rec);
    if pivot > 0 {
        sort_range(array, low, pivot - 1, rec);
    }
    sort_range(array, pivot + 1, high, rec);
}

/// Partition `array[low..=high]` around `array[high]` and return the pivot's
/// final index.
fn partition(array: &mut [i32], low: usize, high: usize, rec: &mut Recorder) -> usize {
    let pivot = array[high];
    // Next slot for an element smaller than the pivot
    let mut boundary = low;

    for j in low..high {
        rec.compare(array, j, high);
        if array[j] < pivot {
            rec.swap(array, boundary, j);
            boundary += 1;
        }
    }

    rec.swap(array, boundary, high);
    boundary
}
