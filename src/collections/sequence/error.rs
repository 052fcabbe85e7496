use derive_more::{Display, Error, From};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for sequence with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("range {start}..{end} out of bounds for sequence with {len} elements")]
pub struct RangeOutOfBounds {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("joined string would exceed the maximum string capacity")]
pub struct CapacityOverflow;

/// Any of the failures reported by the fallible [`Sequence`](super::Sequence) operations, for
/// callers that chain several of them with `?`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error)]
pub enum SequenceError {
    IndexOutOfBounds(IndexOutOfBounds),
    RangeOutOfBounds(RangeOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}
