use thiserror::Error;

/// Precondition violations reported by the checked `try_*` operations.
///
/// The panicking counterparts (`get`, `slice`, `first`, ...) panic with the
/// `Display` text of these variants.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SequenceError {
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("invalid slice [{start}, {end}) for sequence of length {len}")]
    InvalidSlice { start: usize, end: usize, len: usize },
    #[error("sequence is empty")]
    Empty,
    #[error("cursor {cursor} exhausted for sequence of length {len}")]
    CursorExhausted { cursor: usize, len: usize },
    #[error("cursor position {position} out of range for sequence of length {len}")]
    CursorOutOfRange { position: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::SequenceError;

    #[test]
    fn messages_name_the_offending_values() {
        let err = SequenceError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for sequence of length 3");

        let err = SequenceError::InvalidSlice {
            start: 2,
            end: 2,
            len: 5,
        };
        assert_eq!(err.to_string(), "invalid slice [2, 2) for sequence of length 5");

        assert_eq!(SequenceError::Empty.to_string(), "sequence is empty");
    }
}
