//! Bubble sort step generator

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
        for j in 0..n - 1 - i {
            rec.compare(&array, j, j + 1);
            if array[j] > array[j + 1] {
                rec.swap(&mut array, j, j + 1);
            }
        }
        // Largest remaining value has bubbled to the end of this pass
        rec.mark_sorted(n - 1 - i);
    }

    rec.finish(&array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Highlight;

    #[test]
    fn test_three_element_trace() {
        let run = generate(&[3, 1, 2]);
        let steps = run.steps();

        assert_eq!(steps[0].highlight, Highlight::Compare(0, 1));
        assert_eq!(steps[0].array, vec![3, 1, 2]);
        assert_eq!(steps[1].highlight, Highlight::Swap(0, 1));
        assert_eq!(steps[1].array, vec![3, 1, 2]);
        assert_eq!(steps[2].highlight, Highlight::Swap(0, 1));
        assert_eq!(steps[2].array, vec![1, 3, 2]);

        let last = run.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 3]);
        assert_eq!(last.sorted.len(), 3);
    }

    #[test]
    fn test_sorted_tail_grows_per_pass() {
        let run = generate(&[1, 2, 3]);
        // Pass 0: compare (0,1), compare (1,2); pass 1: compare (0,1)
        assert_eq!(run.len(), 4);
        assert!(run.steps()[2].is_sorted(2));
        assert!(!run.steps()[1].is_sorted(2));
    }

    #[test]
    fn test_equal_values_never_swap() {
        let run = generate(&[4, 4]);
        assert!(run.iter().all(|s| s.swapping().is_none()));
    }
}
