//! Window length validation.

use crate::errors::WindowSumError;

/// A strictly positive window length.
///
/// The upper bound depends on the input, so `L > N` is only detected when
/// the window is applied (see [`crate::window`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowLength(usize);

impl WindowLength {
    /// Validate a requested window length.
    ///
    /// Takes a signed value so that zero and negative requests are
    /// reported as [`WindowSumError::InvalidLength`] instead of wrapping.
    pub fn new(requested: i64) -> Result<Self, WindowSumError> {
        if requested <= 0 {
            return Err(WindowSumError::InvalidLength(requested));
        }
        usize::try_from(requested)
            .map(Self)
            .map_err(|_| WindowSumError::InvalidLength(requested))
    }

    /// Default window for an input of `input_len` digits: `ceil(N/2)`.
    ///
    /// Floors at 1 so an empty input reports `NoValidWindow` rather than
    /// `InvalidLength`.
    pub fn default_for(input_len: usize) -> Self {
        Self(input_len.div_ceil(2).max(1))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(WindowLength::new(0), Err(WindowSumError::InvalidLength(0)));
        assert_eq!(WindowLength::new(-4), Err(WindowSumError::InvalidLength(-4)));
        assert_eq!(
            WindowLength::new(i64::MIN),
            Err(WindowSumError::InvalidLength(i64::MIN))
        );
    }

    #[test]
    fn test_new_accepts_positive() {
        assert_eq!(WindowLength::new(1).unwrap().get(), 1);
        assert_eq!(WindowLength::new(42).unwrap().get(), 42);
    }

    #[test]
    fn test_default_is_ceil_half() {
        assert_eq!(WindowLength::default_for(5).get(), 3);
        assert_eq!(WindowLength::default_for(4).get(), 2);
        assert_eq!(WindowLength::default_for(1).get(), 1);
        assert_eq!(WindowLength::default_for(0).get(), 1);
    }
}
