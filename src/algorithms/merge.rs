//! Merge sort step generator
//!
//! Top-down merge sort over two buffers that trade roles at every level of
//! the recursion: each level merges from one buffer into the other, so no
//! copying back is needed. Steps snapshot the buffer being written at that
//! level.
//!
//! Merge sort cannot finalize positions before the last merge, so the
//! `sorted` set stays empty until the closing frame.

use super::recorder::Recorder;
use crate::snapshot::Run;

pub fn generate(input: &[i32]) -> Run {
    if let Some(run) = Recorder::trivial(input) {
        return run;
    }

    let mut main = input.to_vec();
    let mut aux = input.to_vec();
    let mut rec = Recorder::new();

    sort_range(&mut main, &mut aux, 0, input.len() - 1, &mut rec);

    rec.finish(&main)
}

fn sort_range(main: &mut [i32], aux: &mut [i32], start: usize, end: usize, rec: &mut Recorder) {
    if start == end {
        return;
    }
    let middle = start + (end - start) / 2;
    sort_range(aux, main, start, middle, rec);
    sort_range(aux, main, middle + 1, end, rec);
    merge(main, aux, start, middle, end, rec);
}

/// Merge the sorted halves `aux[start..=middle]` and `aux[middle+1..=end]`
/// into `main[start..=end]`.
fn merge(
    main: &mut [i32],
    aux: &[i32],
    start: usize,
    middle: usize,
    end: usize,
    rec: &mut Recorder,
) {
    let mut k = start;
    let mut i = start;
    let mut j = middle + 1;

    while i <= middle && j <= end {
        rec.compare(main, i, j);
        // Ties take the left run, keeping the sort stable
        if aux[i] <= aux[j] {
            rec.write(main, k, i, aux[i]);
            i += 1;
        } else {
            rec.write(main, k, j, aux[j]);
            j += 1;
        }
        k += 1;
    }

    while i <= middle {
        rec.compare(main, i, i);
        rec.write(main, k, i, aux[i]);
        i += 1;
        k += 1;
    }

    while j <= end {
        rec.compare(main, j, j);
        rec.write(main, k, j, aux[j]);
        j += 1;
        k += 1;
    }
}
