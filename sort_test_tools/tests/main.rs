use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

// Checks the test bodies themselves against the standard library sort.
struct StdUnstable {}

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort_unstable();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}

instantiate_sort_tests!(std_unstable, StdUnstable);

#[test]
fn patterns_have_requested_shape() {
    assert_eq!(sort_test_tools::patterns::ascending(4), [0, 1, 2, 3]);
    assert_eq!(sort_test_tools::patterns::descending(4), [3, 2, 1, 0]);
    assert_eq!(sort_test_tools::patterns::all_equal(3), [66, 66, 66]);

    let almost = sort_test_tools::patterns::almost_sorted(1_000, 5);
    let mut sorted = almost.clone();
    sorted.sort_unstable();
    assert!(sorted.iter().copied().eq(0..1_000));

    let zipf = sort_test_tools::patterns::random_zipf(500, 1.0);
    assert!(zipf.iter().all(|x| (1..=500).contains(x)));
}
