use std::fmt::Debug;

/// T values are primitive numbers, integer or float
pub trait Scalar: ::num::Num + PartialOrd + Copy + Debug + Default {}
impl<T: ::num::Num + PartialOrd + Copy + Debug + Default> Scalar for T {}

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}
