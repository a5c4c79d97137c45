// src/operand.rs
// The closed set of values a Hosh can be combined with.
//
// Anything that is not already a Hosh is coerced into the version of the
// element on the other side: ids are parsed, bytes are hashed with that
// element's inducer, integers are ranks and six-integer lists are cells.

use crate::hosh::Hosh;
use num_bigint::BigUint;

#[derive(Clone, Debug)]
pub enum Operand<'a> {
    Hosh(&'a Hosh),
    /// Canonical textual id.
    Id(&'a str),
    /// Raw content to be hashed.
    Bytes(&'a [u8]),
    Rank(BigUint),
    Cells(Vec<u64>),
}

impl<'a> From<&'a Hosh> for Operand<'a> {
    fn from(h: &'a Hosh) -> Self {
        Operand::Hosh(h)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(id: &'a str) -> Self {
        Operand::Id(id)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(id: &'a String) -> Self {
        Operand::Id(id)
    }
}

impl<'a> From<&'a [u8]> for Operand<'a> {
    fn from(blob: &'a [u8]) -> Self {
        Operand::Bytes(blob)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Operand<'a> {
    fn from(blob: &'a [u8; N]) -> Self {
        Operand::Bytes(blob)
    }
}

impl<'a> From<&'a Vec<u8>> for Operand<'a> {
    fn from(blob: &'a Vec<u8>) -> Self {
        Operand::Bytes(blob)
    }
}

impl From<BigUint> for Operand<'_> {
    fn from(n: BigUint) -> Self {
        Operand::Rank(n)
    }
}

impl From<&BigUint> for Operand<'_> {
    fn from(n: &BigUint) -> Self {
        Operand::Rank(n.clone())
    }
}

impl From<u64> for Operand<'_> {
    fn from(n: u64) -> Self {
        Operand::Rank(BigUint::from(n))
    }
}

impl From<u128> for Operand<'_> {
    fn from(n: u128) -> Self {
        Operand::Rank(BigUint::from(n))
    }
}

impl From<[u64; 6]> for Operand<'_> {
    fn from(cells: [u64; 6]) -> Self {
        Operand::Cells(cells.to_vec())
    }
}

impl From<&[u64]> for Operand<'_> {
    fn from(cells: &[u64]) -> Self {
        Operand::Cells(cells.to_vec())
    }
}

impl From<Vec<u64>> for Operand<'_> {
    fn from(cells: Vec<u64>) -> Self {
        Operand::Cells(cells)
    }
}
