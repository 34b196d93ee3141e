use std::ops::Range;

use derive_getters::Dissolve;
use derive_more::Display;
use eyre::{eyre, Report, Result};

use scanvec_core_rs::num::PrimUInt;

/// Run is a half-open index range [start, end) covering one maximal stretch
/// of identical values inside a scanned slice. It's not represented as a
/// Rust-native Range for a couple of reasons:
/// - Prohibit 'empty' runs (start == end) or runs with negative length (start > end)
/// - Implement custom traits (e.g. Dissolve) and methods (e.g. contains, cast).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve, Display)]
#[display("[{start}, {end})")]
pub struct Run<Idx: PrimUInt> {
    start: Idx,
    end: Idx,
}

#[allow(clippy::len_without_is_empty)]
impl<Idx: PrimUInt> Run<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(eyre!("Invalid run: start >= end"))
        }
    }

    /// First position covered by the run.
    #[inline(always)]
    pub fn start(&self) -> Idx {
        self.start
    }

    /// Position right past the last one covered by the run.
    #[inline(always)]
    pub fn end(&self) -> Idx {
        self.end
    }

    /// Number of positions covered by the run, always >= 1.
    pub fn len(&self) -> Idx {
        self.end - self.start
    }

    /// Check if the run covers a given position.
    pub fn contains(&self, pos: Idx) -> bool {
        self.start <= pos && pos < self.end
    }

    pub fn cast<T: PrimUInt>(&self) -> Option<Run<T>> {
        match (T::from(self.start), T::from(self.end)) {
            (Some(start), Some(end)) => Some(Run { start, end }),
            _ => None,
        }
    }
}

impl<Idx: PrimUInt> Default for Run<Idx> {
    fn default() -> Self {
        Self {
            start: Idx::zero(),
            end: Idx::one(),
        }
    }
}

impl<Idx: PrimUInt> TryFrom<(Idx, Idx)> for Run<Idx> {
    type Error = Report;

    fn try_from(value: (Idx, Idx)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl<Idx: PrimUInt> From<Run<Idx>> for (Idx, Idx) {
    fn from(run: Run<Idx>) -> Self {
        (run.start, run.end)
    }
}

impl<Idx: PrimUInt> TryFrom<Range<Idx>> for Run<Idx> {
    type Error = Report;

    fn try_from(value: Range<Idx>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl<Idx: PrimUInt> From<Run<Idx>> for Range<Idx> {
    fn from(run: Run<Idx>) -> Self {
        run.start..run.end
    }
}

impl<Idx: PrimUInt> From<&Run<Idx>> for Range<Idx> {
    fn from(run: &Run<Idx>) -> Self {
        run.start..run.end
    }
}

impl<Idx: PrimUInt> PartialEq<(Idx, Idx)> for Run<Idx> {
    fn eq(&self, other: &(Idx, Idx)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}

impl<Idx: PrimUInt> PartialEq<Range<Idx>> for Run<Idx> {
    fn eq(&self, other: &Range<Idx>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<Idx: PrimUInt> PartialEq<Run<Idx>> for Range<Idx> {
    fn eq(&self, other: &Run<Idx>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct() {
        assert_eq!(Run::new(0usize, 10).unwrap(), Run { start: 0, end: 10 });
        assert!(Run::new(1usize, 0).is_err());
        assert!(Run::new(0usize, 0).is_err());
    }

    #[test]
    fn test_len() {
        assert_eq!(Run::new(0usize, 10).unwrap().len(), 10);
        assert_eq!(Run::new(0usize, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_contains() {
        let run = Run::new(1usize, 10).unwrap();
        assert_eq!(run.contains(0), false);
        assert_eq!(run.contains(1), true);
        assert_eq!(run.contains(5), true);
        assert_eq!(run.contains(9), true);
        assert_eq!(run.contains(10), false);
        assert_eq!(run.contains(11), false);
    }

    #[test]
    fn test_cast() {
        let run = Run::new(1usize, 300).unwrap();
        assert_eq!(run.cast::<u16>(), Some(Run { start: 1, end: 300 }));
        assert_eq!(run.cast::<u8>(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Run::new(2usize, 5).unwrap().to_string(), "[2, 5)");
    }

    #[test]
    fn test_conversions() {
        let run = Run::new(1usize, 10).unwrap();
        assert_eq!(<(usize, usize)>::from(run), (1, 10));
        assert_eq!(Range::from(run), 1..10);

        assert_eq!(Run::try_from((1usize, 10usize)).unwrap(), run);
        assert!(Run::try_from((10usize, 1usize)).is_err());

        assert_eq!(Run::try_from(1usize..10).unwrap(), run);
        assert!(Run::try_from(10usize..1).is_err());

        assert_eq!(run, (1, 10));
        assert_eq!(run, 1..10);
        assert_eq!(1..10, run);
    }
}
