use std::error::Error;

#[cfg_attr(not(any(feature = "sequence", feature = "time")), allow(dead_code))]
pub(crate) trait ResultExtension<T, E: Error> {
    /// Like [`Result::unwrap`], but only for error types implementing [`Error`], panicking with the
    /// error's own display message rather than its debug representation.
    ///
    /// Used where an error is statically impossible or where a panicking API wraps a fallible one.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
