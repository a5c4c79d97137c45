// src/digest.rs
// Content -> element. BLAKE3 output is folded into a rank inside the
// requested stratum, then split into cells.

use crate::cells::{self, Cells};
use crate::encoding::id_from_rank;
use crate::groups::GroupVersion;
use crate::kind::ElementKind;
use num_bigint::BigUint;

/// Rank of the element that `blob` hashes to.
///
/// The digest is `version.bytes` long and read little-endian; its top bit is
/// dropped so the integer never exceeds `8 * bytes - 1` bits.
pub fn rank_from_blob(blob: &[u8], kind: ElementKind, version: &GroupVersion) -> BigUint {
    let mut digest = vec![0u8; version.bytes];
    let mut hasher = blake3::Hasher::new();
    hasher.update(blob);
    hasher.finalize_xof().fill(&mut digest);

    let n = BigUint::from_bytes_le(&digest) >> 1u32;
    let p = BigUint::from(version.p);
    match kind {
        ElementKind::Central => n % p,
        ElementKind::Intermediate => (p + n) % &version.p4,
        ElementKind::Generic => (&version.p4 + n) % &version.p6,
    }
}

/// Cells and canonical id for `blob`, computed from a single digest.
pub fn cells_from_blob(blob: &[u8], kind: ElementKind, version: &GroupVersion) -> (Cells, String) {
    let n = rank_from_blob(blob, kind, version);
    let cells = cells::from_reduced_rank(&n, version.p);
    (cells, id_from_rank(&n, version))
}
