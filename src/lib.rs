// src/lib.rs
// Operable identifiers: content hashes that are elements of UT(4, p).

pub mod base777;
pub mod cells;
pub mod components;
pub mod config;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod groups;
pub mod hosh;
pub mod kind;
pub mod operand;
pub mod reserved;

pub use components::{compose, compose_additive};
pub use config::Config;
pub use error::{HoshError, Result};
pub use groups::GroupVersion;
pub use hosh::Hosh;
pub use kind::ElementKind;
pub use operand::Operand;
