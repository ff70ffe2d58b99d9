//! Heap sort step generator

use super::recorder::Recorder;
use crate::snapshot::Run;

pub fn generate(input: &[i32]) -> Run {
    if let Some(run) = Recorder::trivial(input) {
        return run;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut rec = Recorder::new();

    // Build a max-heap bottom-up
    for root in (0..n / 2).rev() {
        sift_down(&mut array, n, root, &mut rec);
    }

    for end in (1..n).rev() {
        rec.swap(&mut array, 0, end);
        rec.mark_sorted(end);
        sift_down(&mut array, end, 0, &mut rec);
    }
    rec.mark_sorted(0);

    rec.finish(&array)
}

/// Restore the heap property for the subtree at `root` within `array[..heap_len]`
fn sift_down(array: &mut [i32], heap_len: usize, root: usize, rec: &mut Recorder) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_len {
        rec.compare(array, left, largest);
        if array[left] > array[largest] {
            largest = left;
        }
    }

    if right < heap_len {
        rec.compare(array, right, largest);
        if array[right] > array[largest] {
            largest = right;
        }
    }

    if largest != root {
        rec.swap(array, root, largest);
        sift_down(array, heap_len, largest, rec);
    }
}
