// src/error.rs

use std::fmt;

use thiserror::Error;

/// Which of the two piece containers an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Queue,
    Reserve,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => write!(f, "queue"),
            Container::Reserve => write!(f, "reserve"),
        }
    }
}

/// Failures of the container and transfer operations.
///
/// Every operation reports these as data; none of them aborts the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("the {0} is empty")]
    Underflow(Container),
    #[error("the {0} is full")]
    CapacityExceeded(Container),
    /// Positional access past the occupied slots. Unreachable from the menu.
    #[error("offset {offset} is outside the {len} occupied slots")]
    OutOfRange { offset: usize, len: usize },
    #[error("triple swap needs a full reserve and at least 3 queued pieces")]
    PreconditionFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_container() {
        assert_eq!(
            PieceError::Underflow(Container::Queue).to_string(),
            "the queue is empty"
        );
        assert_eq!(
            PieceError::CapacityExceeded(Container::Reserve).to_string(),
            "the reserve is full"
        );
        assert_eq!(
            PieceError::OutOfRange { offset: 4, len: 2 }.to_string(),
            "offset 4 is outside the 2 occupied slots"
        );
    }
}
