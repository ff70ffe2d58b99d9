//! Selection sort step generator

use super::recorder::Recorder;
use crate::snapshot::Run;

pub fn generate(input: &[i32]) -> Run {
    if let Some(run) = Recorder::trivial(input) {
        return run;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut rec = Recorder::new();

    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.compare(&array, min_idx, j);
            if array[j] < array[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            rec.swap(&mut array, i, min_idx);
        }
        rec.mark_sorted(i);
    }

    rec.finish(&array)
}
