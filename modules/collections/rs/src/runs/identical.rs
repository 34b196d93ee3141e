/// Rule deciding whether two values belong to the same run.
///
/// Run scanning and run compaction are generic over this rule: a run is a
/// maximal contiguous stretch of pairwise-identical values, where "identical"
/// is whatever the rule says. `PartialEq::eq` is the usual choice, but any
/// coarser equivalence (e.g. comparing keys extracted from the values) works
/// just as well.
pub trait Identical<T> {
    /// Returns `true` if `first` and `second` should be treated as the same
    /// value for the purpose of run detection. No guarantee is made about
    /// which of the two ends up representing the run.
    fn identical(&self, first: &T, second: &T) -> bool;
}

impl<T, F> Identical<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn identical(&self, first: &T, second: &T) -> bool {
        self(first, second)
    }
}
