use mockall::mock;
use showcase_core::RandomSource;

mock! {
    pub Rng {}

    impl RandomSource for Rng {
        fn range_inclusive(&mut self, low: i64, high: i64) -> i64;
        fn index(&mut self, len: usize) -> usize;
    }
}

/// A mock that hands out `indices` for `index()` and `values` for
/// `range_inclusive()`, in order.
#[allow(dead_code)]
pub fn scripted(indices: Vec<usize>, values: Vec<i64>) -> MockRng {
    let mut rng = MockRng::new();

    let mut indices = indices.into_iter();
    rng.expect_index()
        .returning(move |_| indices.next().expect("ran out of scripted indices"));

    let mut values = values.into_iter();
    rng.expect_range_inclusive()
        .returning(move |_, _| values.next().expect("ran out of scripted values"));

    rng
}
