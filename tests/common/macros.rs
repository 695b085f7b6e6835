/// Asserts that two floats differ by less than `eps` (default 1e-6).
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, 1e-6)
    };
    ($left:expr, $right:expr, $eps:expr) => {
        let (l, r): (f32, f32) = ($left, $right);
        assert!((l - r).abs() < $eps, "{} is not within {} of {}", l, $eps, r);
    };
}

/// Asserts that `part` in a decoded organism has exactly `n` child schematics.
#[macro_export]
macro_rules! assert_children {
    ($lifeform:expr, $part:expr, $n:expr) => {
        let part = $lifeform
            .cell_part($part)
            .expect("Part not found in organism");
        assert_eq!(
            part.children().len(),
            $n,
            "Part {} has {} children, expected {}",
            $part,
            part.children().len(),
            $n
        );
    };
}
