// src/error.rs
// Error taxonomy shared by every constructor and operator.
// None of these are transient: they all describe invalid input.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HoshError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoshError {
    /// Content is neither bytes to hash nor a list of six cells.
    #[error("Wrong content: {0}")]
    WrongContent(String),

    /// An element kind was given together with explicit cells.
    #[error("Dangling element kind: {0}")]
    DanglingEtype(String),

    #[error("Cell value too high: {value} >= {p}")]
    CellValueTooHigh { value: u64, p: u64 },

    /// Unregistered length or malformed textual identifier.
    #[error("Wrong identifier: {0}")]
    WrongIdentifier(String),

    #[error("Element outside allowed range: {0}")]
    ElementTooHigh(String),

    /// Operands belong to different group versions.
    #[error("Incompatible operands: {left} digits != {right} digits")]
    WrongVersion { left: usize, right: usize },

    #[error("Wrong operands: {0}")]
    WrongOperands(String),
}
