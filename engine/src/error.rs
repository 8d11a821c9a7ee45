use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    InvariantViolation(String),
    EmptyBody,
    TailUnderflow,
    BoardFull,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvariantViolation(message) => {
                write!(f, "invariant violation: {}", message)
            }
            EngineError::EmptyBody => write!(f, "snake body is empty"),
            EngineError::TailUnderflow => {
                write!(f, "cannot pop the tail of a one-segment body")
            }
            EngineError::BoardFull => write!(f, "no empty cell left on the board"),
        }
    }
}

impl std::error::Error for EngineError {}
