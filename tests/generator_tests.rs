// Integration tests for the step generators

use sortty::algorithms::Algorithm;
use sortty::snapshot::{Highlight, Run};

fn sorted_copy(input: &[i32]) -> Vec<i32> {
    let mut expected = input.to_vec();
    expected.sort();
    expected
}

fn assert_well_formed(algorithm: Algorithm, input: &[i32], run: &Run) {
    assert!(!run.is_empty(), "{}: empty run", algorithm);

    let last = run.last().unwrap();
    assert_eq!(last.array, sorted_copy(input), "{}: final array", algorithm);
    assert_eq!(last.sorted.len(), input.len(), "{}: final sorted set", algorithm);
    assert!((0..input.len()).all(|i| last.is_sorted(i)));

    for step in run {
        assert_eq!(step.array.len(), input.len());
        match step.highlight {
            Highlight::Compare(a, b) | Highlight::Swap(a, b) => {
                assert!(a < input.len() && b < input.len(), "{}: index out of range", algorithm);
            }
            Highlight::None => {}
        }
    }
}

#[test]
fn test_bubble_sort_scenario() {
    let run = Algorithm::BubbleSort.generate(&[3, 1, 2]);
    let steps = run.steps();

    assert_eq!(steps[0].comparing(), Some((0, 1)));
    assert_eq!(steps[0].array, vec![3, 1, 2]);
    assert_eq!(steps[1].swapping(), Some((0, 1)));
    assert_eq!(steps[1].array, vec![3, 1, 2]);
    assert_eq!(steps[2].swapping(), Some((0, 1)));
    assert_eq!(steps[2].array, vec![1, 3, 2]);

    let last = run.last().unwrap();
    assert_eq!(last.array, vec![1, 2, 3]);
    assert!(last.is_sorted(0) && last.is_sorted(1) && last.is_sorted(2));
}

#[test]
fn test_single_element_any_algorithm() {
    for algorithm in Algorithm::ALL {
        let run = algorithm.generate(&[5]);
        assert_eq!(run.len(), 1);
        assert_eq!(run.steps()[0].array, vec![5]);
        assert_eq!(run.steps()[0].highlight, Highlight::None);
        assert!(run.steps()[0].is_sorted(0));
    }
}

#[test]
fn test_empty_input_any_algorithm() {
    for algorithm in Algorithm::ALL {
        let run = algorithm.generate(&[]);
        assert_eq!(run.len(), 1);
        assert!(run.steps()[0].array.is_empty());
        assert!(run.steps()[0].sorted.is_empty());
    }
}

#[test]
fn test_all_algorithms_sort_typical_inputs() {
    let inputs: Vec<Vec<i32>> = vec![
        vec![2, 1],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![8, 3, 10, 1, 6, 14, 4, 7, 13, 20, 18, 15],
        vec![0, -65536, 65535, -1, 1, 0, 0],
        vec![7, 7, 7, 7, 7],
        vec![3, -3, 3, -3, 3, -3],
    ];

    for input in &inputs {
        for algorithm in Algorithm::ALL {
            let run = algorithm.generate(input);
            assert_well_formed(algorithm, input, &run);
        }
    }
}

#[test]
fn test_generation_does_not_touch_input() {
    let input = vec![9, 2, 7, 4];
    for algorithm in Algorithm::ALL {
        let _ = algorithm.generate(&input);
        assert_eq!(input, vec![9, 2, 7, 4]);
    }
}

#[test]
fn test_mutations_come_in_matching_pairs() {
    let input = [6, 2, 9, 1, 5, 3];
    for algorithm in Algorithm::ALL {
        let run = algorithm.generate(&input);
        let steps = run.steps();
        let mut i = 0;
        while i < steps.len() {
            if let Some(pair) = steps[i].swapping() {
                assert_eq!(steps[i + 1].swapping(), Some(pair), "{}", algorithm);
                i += 2;
            } else {
                i += 1;
            }
        }
    }
}

#[test]
fn test_incremental_sorted_only_for_bubble_selection_heap() {
    let input = [4, 1, 3, 9, 7];
    for algorithm in Algorithm::ALL {
        let run = algorithm.generate(&input);
        let grows_early = run.steps()[..run.len() - 1]
            .iter()
            .any(|s| !s.sorted.is_empty());
        let expected = matches!(
            algorithm,
            Algorithm::BubbleSort | Algorithm::SelectionSort | Algorithm::HeapSort
        );
        assert_eq!(grows_early, expected, "{}", algorithm);
    }
}

#[test]
fn test_run_statistics() {
    let run = Algorithm::BubbleSort.generate(&[3, 1, 2]);
    // Pass 0 compares (0,1), (1,2); pass 1 compares (0,1)
    assert_eq!(run.comparisons(), 3);
    // 3>1 then 3>2
    assert_eq!(run.mutations(), 2);
}
