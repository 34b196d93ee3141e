use scanvec_core_rs::num::Scalar;

use super::identical::Identical;
use super::run::Run;
use super::scan::runs;

/// Length of the longest run of values identical to `target`.
///
/// Returns 0 when the slice is empty or `target` never occurs in it.
pub fn longest_run_of<V, I: Identical<V>>(data: &[V], target: &V, identical: I) -> usize {
    let mut best = 0;
    let mut current = 0;

    for value in data {
        if identical.identical(target, value) {
            current += 1;
        } else {
            best = best.max(current);
            current = 0;
        }
    }

    // A run touching the right boundary never reaches the reset branch
    best.max(current)
}

/// The maximum value of the slice and the first longest of its runs.
///
/// Returns None for an empty slice. NaN values never win the max-finding
/// fold and never extend a run of the maximum, so a float slice where only
/// NaNs are left as candidates also yields None.
pub fn max_run<V: Scalar>(data: &[V]) -> Option<(V, Run<usize>)> {
    let mut values = data.iter();
    let mut max = values.next()?;
    for value in values {
        if value > max {
            max = value;
        }
    }

    let mut best: Option<Run<usize>> = None;
    for (value, run) in runs(data, PartialEq::eq) {
        if value == max && best.map_or(true, |b| run.len() > b.len()) {
            best = Some(run);
        }
    }

    best.map(|run| (*max, run))
}

/// Length of the longest contiguous run of the maximum value of the slice.
///
/// An empty slice has no maximum and yields 0.
pub fn longest_max_run<V: Scalar>(data: &[V]) -> usize {
    match max_run(data) {
        Some((_, run)) => run.len(),
        None => 0,
    }
}
