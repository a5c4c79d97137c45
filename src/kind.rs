// src/kind.rs
// The three strata of UT(4, p), told apart by which cells are structurally zero.
//
//   Central       only a0 may be non-zero; commutes with everything (order p)
//   Intermediate  a5 = a4 = 0; commutes within itself and with Central (order p^4)
//   Generic       everything else (order p^6)
//
// Older material names them by the ordering they preserve under products:
// "unordered" is Central, "hybrid" is Intermediate, "ordered" is Generic.

use crate::cells::Cells;
use crate::error::HoshError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    Central,
    Intermediate,
    #[default]
    Generic,
}

impl ElementKind {
    pub fn of(cells: &Cells) -> Self {
        if cells[..5].iter().all(|&c| c == 0) {
            ElementKind::Central
        } else if cells[..2].iter().all(|&c| c == 0) {
            ElementKind::Intermediate
        } else {
            ElementKind::Generic
        }
    }

    /// Legacy name for this stratum.
    pub fn legacy_name(self) -> &'static str {
        match self {
            ElementKind::Central => "unordered",
            ElementKind::Intermediate => "hybrid",
            ElementKind::Generic => "ordered",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Central => "central",
            ElementKind::Intermediate => "intermediate",
            ElementKind::Generic => "generic",
        };
        f.pad(name)
    }
}

impl FromStr for ElementKind {
    type Err = HoshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "central" | "unordered" => Ok(ElementKind::Central),
            "intermediate" | "hybrid" => Ok(ElementKind::Intermediate),
            "generic" | "ordered" => Ok(ElementKind::Generic),
            _ => Err(HoshError::WrongContent(format!("Unknown element kind: {s}"))),
        }
    }
}
