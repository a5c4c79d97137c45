// src/hosh.rs
// The operable identifier: an element of UT(4, p) plus lazily derived views.
//
// Cells never change after construction. Rank, ids, bit string and reversal
// are computed on first access and kept for the lifetime of the value.

use crate::base777::{rank_from_sid, sid_from_rank};
use crate::cells::{self, Cells, IDENTITY};
use crate::components::ComponentCache;
use crate::digest::cells_from_blob;
use crate::encoding::{bits_from_rank, id_from_rank, rank_from_id};
use crate::error::{HoshError, Result};
use crate::groups::{GroupVersion, VERSIONS};
use crate::kind::ElementKind;
use crate::operand::Operand;
use num_bigint::BigUint;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::OnceLock;

pub struct Hosh {
    version: &'static GroupVersion,
    cells: Cells,
    // Kind used to hash raw bytes met as operands; `None` means own kind.
    inducer: Option<ElementKind>,
    rank: OnceLock<BigUint>,
    id: OnceLock<String>,
    sid: OnceLock<String>,
    bits: OnceLock<String>,
    rev: OnceLock<Box<Hosh>>,
    pub(crate) component_cache: ComponentCache,
}

// One identity per registered version.
static IDENTITIES: [OnceLock<Hosh>; VERSIONS] = [const { OnceLock::new() }; VERSIONS];

// ============================================================================
// 1. Construction
// ============================================================================

impl Hosh {
    fn build(cells: Cells, version: &'static GroupVersion) -> Self {
        Hosh {
            version,
            cells,
            inducer: None,
            rank: OnceLock::new(),
            id: OnceLock::new(),
            sid: OnceLock::new(),
            bits: OnceLock::new(),
            rev: OnceLock::new(),
            component_cache: ComponentCache::default(),
        }
    }

    fn with_cells(&self, cells: Cells) -> Self {
        Hosh::build(cells, self.version)
    }

    /// General constructor: `content` must be bytes (hashed into an element
    /// of `kind`, generic by default) or a list of six cells.
    ///
    /// A kind given together with cells is rejected with `DanglingEtype`;
    /// any other operand shape is `WrongContent`.
    pub fn new<'a>(
        content: impl Into<Operand<'a>>,
        kind: Option<ElementKind>,
        version: &'static GroupVersion,
    ) -> Result<Self> {
        match content.into() {
            Operand::Bytes(blob) => Ok(Hosh::from_blob(blob, kind.unwrap_or_default(), version)),
            Operand::Cells(cells) => match kind {
                Some(kind) => Err(HoshError::DanglingEtype(format!(
                    "Cannot set kind={kind} when providing cells ({cells:?})."
                ))),
                None => Hosh::from_cells(&cells, version),
            },
            other => Err(HoshError::WrongContent(format!(
                "No valid content provided: {other:?}. It should be bytes to be hashed or a list of six cells."
            ))),
        }
    }

    /// Generic element of the default version derived from `blob`.
    pub fn hash(blob: &[u8]) -> Self {
        Hosh::from_blob(blob, ElementKind::Generic, GroupVersion::default_version())
    }

    pub fn from_blob(blob: &[u8], kind: ElementKind, version: &'static GroupVersion) -> Self {
        let (cells, id) = cells_from_blob(blob, kind, version);
        let mut h = Hosh::build(cells, version);
        h.id = OnceLock::from(id);
        h
    }

    pub fn from_cells(cells: &[u64], version: &'static GroupVersion) -> Result<Self> {
        let cells: Cells = cells.try_into().map_err(|_| {
            HoshError::WrongContent(format!("Expected six cells, got {}: {cells:?}", cells.len()))
        })?;
        cells::check(&cells, version.p)?;
        Ok(Hosh::build(cells, version))
    }

    pub fn from_rank(n: &BigUint, version: &'static GroupVersion) -> Result<Self> {
        let cells = cells::from_rank(n, version.p)?;
        let mut h = Hosh::build(cells, version);
        h.rank = OnceLock::from(n.clone());
        Ok(h)
    }

    /// Parses a canonical id. The version follows from its length.
    pub fn from_id(id: &str) -> Result<Self> {
        let (version, n) = rank_from_id(id)?;
        let mut h = Hosh::build(cells::from_reduced_rank(&n, version.p), version);
        h.rank = OnceLock::from(n);
        h.id = OnceLock::from(id.to_string());
        Ok(h)
    }

    /// Parses a short id. The version follows from its symbol count.
    pub fn from_sid(sid: &str) -> Result<Self> {
        let (version, n) = rank_from_sid(sid)?;
        let mut h = Hosh::build(cells::from_reduced_rank(&n, version.p), version);
        h.rank = OnceLock::from(n);
        h.sid = OnceLock::from(sid.to_string());
        Ok(h)
    }

    /// Neutral element. Bytes multiplied into it become generic elements.
    pub fn identity(version: &'static GroupVersion) -> Self {
        IDENTITIES[version.slot]
            .get_or_init(|| Hosh::build(IDENTITY, version).with_inducer(ElementKind::Generic))
            .clone()
    }

    /// Same element, coercing future byte operands into `kind`.
    pub fn with_inducer(&self, kind: ElementKind) -> Self {
        let mut h = self.clone();
        h.inducer = Some(kind);
        h
    }

    /// Identity of this version whose inducer is this element's kind.
    pub fn neutral(&self) -> Self {
        Hosh::identity(self.version).with_inducer(self.kind())
    }
}

// ============================================================================
// 2. Derived views
// ============================================================================

impl Hosh {
    pub fn version(&self) -> &'static GroupVersion {
        self.version
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::of(&self.cells)
    }

    pub fn inducer(&self) -> ElementKind {
        self.inducer.unwrap_or_else(|| self.kind())
    }

    pub fn is_identity(&self) -> bool {
        self.cells == IDENTITY
    }

    pub fn rank(&self) -> &BigUint {
        self.rank.get_or_init(|| cells::to_rank(&self.cells, self.version.p))
    }

    pub fn id(&self) -> &str {
        self.id.get_or_init(|| id_from_rank(self.rank(), self.version))
    }

    pub fn sid(&self) -> &str {
        self.sid.get_or_init(|| sid_from_rank(self.rank(), self.version))
    }

    pub fn bits(&self) -> &str {
        self.bits.get_or_init(|| bits_from_rank(self.rank(), self.version))
    }

    /// Mirrored element; not the inverse.
    ///
    /// Generic elements reverse all six cells, intermediate ones the last
    /// four. A central element has a single cell, so its hex digits are
    /// reversed instead, keeping the lowest two in place.
    ///
    /// `h.rev().rev() == h` as long as `h.rev()` stays in the stratum of `h`.
    /// Zero cells can move it elsewhere: `[0, 1, 0, 0, 0, 0]` reverses to the
    /// intermediate `[0, 0, 0, 0, 1, 0]`, which reverses to `[0, 0, 0, 1, 0, 0]`.
    pub fn rev(&self) -> &Hosh {
        self.rev.get_or_init(|| {
            let mut cells = self.cells;
            match self.kind() {
                ElementKind::Generic => cells.reverse(),
                ElementKind::Intermediate => cells[2..].reverse(),
                ElementKind::Central => cells[5] = reverse_central(cells[5], self.version),
            }
            Box::new(self.with_cells(cells))
        })
    }
}

fn reverse_central(n: u64, version: &GroupVersion) -> u64 {
    if n == 0 {
        return 0;
    }
    let h = version.hexsize();
    let shift = 4 * h as u32;
    let low = n & ((1u64 << shift) - 1);
    let mut digits: Vec<u64> = (0..h).map(|i| (low >> (4 * i)) & 0xf).collect();
    digits[2..].reverse();
    let low = digits.iter().rev().fold(0, |acc, &d| (acc << 4) | d);
    (n >> shift) << shift | low
}

// ============================================================================
// 3. Group operations
// ============================================================================

impl Hosh {
    fn check_version(&self, other: &Hosh) -> Result<()> {
        if self.version != other.version {
            return Err(HoshError::WrongVersion {
                left: self.version.digits,
                right: other.version.digits,
            });
        }
        Ok(())
    }

    fn assert_same_version(&self, other: &Hosh) {
        if let Err(e) = self.check_version(other) {
            panic!("{e}");
        }
    }

    /// Coerces `other` into an element of this version.
    ///
    /// Bytes are hashed using this element's inducer.
    pub fn convert<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Cow<'a, Hosh>> {
        let other = match other.into() {
            Operand::Hosh(h) => Cow::Borrowed(h),
            Operand::Id(id) => Cow::Owned(Hosh::from_id(id)?),
            Operand::Bytes(blob) => Cow::Owned(Hosh::from_blob(blob, self.inducer(), self.version)),
            Operand::Rank(n) => Cow::Owned(Hosh::from_rank(&n, self.version)?),
            Operand::Cells(c) => Cow::Owned(Hosh::from_cells(&c, self.version)?),
        };
        self.check_version(&other)?;
        Ok(other)
    }

    /// Multiplicative inverse.
    pub fn inv(&self) -> Hosh {
        self.with_cells(cells::inv(&self.cells, self.version.p))
    }

    /// Additive inverse: each cell negated on its own.
    pub fn additive_inverse(&self) -> Hosh {
        self.with_cells(cells::neg(&self.cells, self.version.p))
    }

    /// Exchanges cells a2 and a5. Applying it twice is a no-op.
    pub fn swap(&self) -> Hosh {
        self.with_cells(cells::swap(&self.cells))
    }

    pub fn pow(&self, k: u64) -> Result<Hosh> {
        match k {
            0 => Err(HoshError::WrongOperands("Exponent must be positive.".to_string())),
            1 => Ok(self.clone()),
            _ => Ok(self.with_cells(cells::pow(&self.cells, k, self.version.p))),
        }
    }

    /// The unique `r` such that `r.pow(k) == self`.
    pub fn root(&self, k: u64) -> Result<Hosh> {
        if k == 1 {
            return Ok(self.clone());
        }
        Ok(self.with_cells(cells::root(&self.cells, k, self.version.p)?))
    }

    pub fn try_mul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(cells::mul(&self.cells, &other.cells, self.version.p)))
    }

    /// `other * self`.
    pub fn try_rmul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(cells::mul(&other.cells, &self.cells, self.version.p)))
    }

    pub fn try_div<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(divide(&self.cells, &other.cells, self.version.p)))
    }

    /// `other / self`.
    pub fn try_rdiv<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(divide(&other.cells, &self.cells, self.version.p)))
    }

    pub fn try_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(cells::add(&self.cells, &other.cells, self.version.p)))
    }

    pub fn try_sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(cells::sub(&self.cells, &other.cells, self.version.p)))
    }

    /// `other - self`.
    pub fn try_rsub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.with_cells(cells::sub(&other.cells, &self.cells, self.version.p)))
    }

    /// Product taken with a2 and a5 exchanged on both sides and on the result.
    ///
    /// Intermediate elements commute under `*` but generally not here.
    pub fn try_hpow<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.swapped(&self.cells, &other.cells, cells::mul))
    }

    /// `other.hpow(self)`.
    pub fn try_rhpow<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.swapped(&other.cells, &self.cells, cells::mul))
    }

    /// Undoes [`Hosh::try_hpow`]: `a.hpow(b).lift(b) == a`.
    pub fn try_lift<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.swapped(&self.cells, &other.cells, divide))
    }

    /// `other.lift(self)`.
    pub fn try_rlift<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Hosh> {
        let other = self.convert(other)?;
        Ok(self.swapped(&other.cells, &self.cells, divide))
    }

    /// # Panics
    /// If `other` belongs to another version.
    pub fn hpow(&self, other: &Hosh) -> Hosh {
        self.assert_same_version(other);
        self.swapped(&self.cells, &other.cells, cells::mul)
    }

    /// # Panics
    /// If `other` belongs to another version.
    pub fn lift(&self, other: &Hosh) -> Hosh {
        self.assert_same_version(other);
        self.swapped(&self.cells, &other.cells, divide)
    }

    fn swapped(&self, a: &Cells, b: &Cells, op: fn(&Cells, &Cells, u64) -> Cells) -> Hosh {
        let c = op(&cells::swap(a), &cells::swap(b), self.version.p);
        self.with_cells(cells::swap(&c))
    }

    /// Equality against any operand; mixing versions is an error.
    pub fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        let other = self.convert(other)?;
        Ok(self.cells == other.cells)
    }
}

fn divide(a: &Cells, b: &Cells, p: u64) -> Cells {
    cells::mul(a, &cells::inv(b, p), p)
}

// ============================================================================
// 4. Operators (Hosh x Hosh only; coercing forms are the try_* methods)
// ============================================================================

macro_rules! hosh_binop {
    ($trait:ident, $method:ident, $f:expr) => {
        /// # Panics
        /// If the operands belong to different versions.
        impl<'a, 'b> $trait<&'b Hosh> for &'a Hosh {
            type Output = Hosh;
            fn $method(self, other: &'b Hosh) -> Hosh {
                self.assert_same_version(other);
                self.with_cells(($f)(&self.cells, &other.cells, self.version.p))
            }
        }

        impl $trait<&Hosh> for Hosh {
            type Output = Hosh;
            fn $method(self, other: &Hosh) -> Hosh {
                (&self).$method(other)
            }
        }

        impl $trait<Hosh> for &Hosh {
            type Output = Hosh;
            fn $method(self, other: Hosh) -> Hosh {
                self.$method(&other)
            }
        }

        impl $trait for Hosh {
            type Output = Hosh;
            fn $method(self, other: Hosh) -> Hosh {
                (&self).$method(&other)
            }
        }
    };
}

hosh_binop!(Mul, mul, cells::mul);
hosh_binop!(Div, div, divide);
hosh_binop!(Add, add, cells::add);
hosh_binop!(Sub, sub, cells::sub);

impl Neg for &Hosh {
    type Output = Hosh;
    fn neg(self) -> Hosh {
        self.additive_inverse()
    }
}

impl Neg for Hosh {
    type Output = Hosh;
    fn neg(self) -> Hosh {
        self.additive_inverse()
    }
}

// ============================================================================
// 5. Std traits
// ============================================================================

impl Clone for Hosh {
    // The component cache is per instance and starts empty.
    fn clone(&self) -> Self {
        Hosh {
            version: self.version,
            cells: self.cells,
            inducer: self.inducer,
            rank: self.rank.clone(),
            id: self.id.clone(),
            sid: self.sid.clone(),
            bits: self.bits.clone(),
            rev: self.rev.clone(),
            component_cache: ComponentCache::default(),
        }
    }
}

/// Elements of different versions are never equal.
impl PartialEq for Hosh {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.cells == other.cells
    }
}

impl Eq for Hosh {}

impl Hash for Hosh {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.digits.hash(state);
        self.cells.hash(state);
    }
}

impl fmt::Display for Hosh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Debug for Hosh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hosh({})", self.id())
    }
}

impl Serialize for Hosh {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Hosh {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Hosh::from_id(&id).map_err(de::Error::custom)
    }
}
