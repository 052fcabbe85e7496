use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("offset of {seconds} seconds is not within a day of UTC")]
pub struct OffsetOutOfRange {
    pub seconds: i32,
}
