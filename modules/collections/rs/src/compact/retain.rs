use std::marker::PhantomData;

use ::impl_tools::autoimpl;

/// Rule deciding whether an element survives compaction.
#[autoimpl(for <M: trait + ?Sized> &mut M, Box<M>)]
pub trait Retain<T> {
    /// Returns `true` if `val` should be kept in the compacted prefix.
    fn keep(&mut self, val: &T) -> bool;
}

/// Adapter turning a (possibly stateful) closure into a `Retain` rule.
pub struct RetainFn<T, F>
where
    F: FnMut(&T) -> bool,
{
    keep_fn: F,
    _phantom: PhantomData<T>,
}

impl<T, F> RetainFn<T, F>
where
    F: FnMut(&T) -> bool,
{
    pub fn new(keep_fn: F) -> Self {
        Self {
            keep_fn,
            _phantom: Default::default(),
        }
    }
}

impl<T, F> Retain<T> for RetainFn<T, F>
where
    F: FnMut(&T) -> bool,
{
    #[inline(always)]
    fn keep(&mut self, val: &T) -> bool {
        (self.keep_fn)(val)
    }
}
