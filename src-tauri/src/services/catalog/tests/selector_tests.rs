use super::*;

#[test]
fn test_pick_empty_is_none() {
    let mut selector = Selector::with_seed(7);
    assert_eq!(selector.pick(0), None);
}

#[test]
fn test_pick_single_is_zero() {
    let mut selector = Selector::with_seed(7);
    for _ in 0..20 {
        assert_eq!(selector.pick(1), Some(0));
    }
}

#[test]
fn test_pick_stays_in_range() {
    let mut selector = Selector::with_seed(42);
    for len in 1..40 {
        for _ in 0..50 {
            let index = selector.pick(len).unwrap();
            assert!(index < len);
        }
    }
}

#[test]
fn test_pick_is_roughly_uniform() {
    let mut selector = Selector::with_seed(1234);
    let len = 5;
    let draws = 50_000;
    let mut counts = vec![0usize; len];
    for _ in 0..draws {
        counts[selector.pick(len).unwrap()] += 1;
    }

    // Expected 10_000 per bucket; allow 5% deviation.
    let expected = draws / len;
    for (index, count) in counts.iter().enumerate() {
        let diff = count.abs_diff(expected);
        assert!(
            diff < expected / 20,
            "index {index} drawn {count} times, expected about {expected}"
        );
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = Selector::with_seed(99);
    let mut b = Selector::with_seed(99);
    let seq_a: Vec<_> = (0..32).map(|_| a.pick(10)).collect();
    let seq_b: Vec<_> = (0..32).map(|_| b.pick(10)).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_generator_state_advances() {
    let mut selector = Selector::with_seed(5);
    let draws: Vec<_> = (0..64).map(|_| selector.pick(1000).unwrap()).collect();
    let first = draws[0];
    assert!(draws.iter().any(|&d| d != first));
}
