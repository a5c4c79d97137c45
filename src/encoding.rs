// src/encoding.rs
// Canonical textual identifier: rank <-> fixed-width base-64 string.
//
// Digits are little-endian (least significant symbol first) and padded with
// the zero symbol. The layout depends on the stratum of the rank:
//   central       "X_hhhhhhhhh______..."  one b64 symbol, '_', hex digits, '_' padding
//   intermediate  "XX_hhhhhhhhhhhhhh..."  two b64 symbols, '_', hex digits
//   generic       "XXXXXXXXXXXXXXXXX..."  plain base-64, no separator

use crate::error::{HoshError, Result};
use crate::groups::GroupVersion;
use num_bigint::BigUint;
use num_traits::{One, Zero};

// ============================================================================
// ALPHABET
// ============================================================================

/// The hex alphabet is the first sixteen symbols of this one.
pub const B64: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-.";
pub const SEPARATOR: u8 = b'_';

const INVALID: u8 = 0xFF;

const REVERSE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < 64 {
        table[B64[i] as usize] = i as u8;
        i += 1;
    }
    table
};

fn digit_value(c: u8, radix: u32) -> Option<u8> {
    match REVERSE.get(c as usize) {
        Some(&v) if v != INVALID && (v as u32) < radix => Some(v),
        _ => None,
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

fn enc(num: &BigUint, radix: u32, digits: usize, out: &mut String) {
    let start = out.len();
    if !num.is_zero() {
        out.extend(num.to_radix_le(radix).into_iter().map(|d| B64[d as usize] as char));
    }
    while out.len() - start < digits {
        out.push('0');
    }
}

fn dec(symbols: &[u8], radix: u32) -> Option<BigUint> {
    let digits = symbols
        .iter()
        .map(|&c| digit_value(c, radix))
        .collect::<Option<Vec<u8>>>()?;
    BigUint::from_radix_le(&digits, radix)
}

fn pow16(k: usize) -> BigUint {
    BigUint::one() << (4 * k)
}

fn wrong(id: &str, reason: &str) -> HoshError {
    tracing::debug!(id, reason, "rejected identifier");
    HoshError::WrongIdentifier(format!("{reason}   id:[{id}]"))
}

// ============================================================================
// RANK <-> ID
// ============================================================================

/// Canonical id for a rank in `[0, p^6)`.
pub fn id_from_rank(n: &BigUint, version: &GroupVersion) -> String {
    let digits = version.digits;
    let p = BigUint::from(version.p);
    let mut id = String::with_capacity(digits);
    if n.is_zero() {
        id.extend(std::iter::repeat('0').take(digits));
    } else if n < &p {
        let h = version.hexsize();
        let scale = pow16(h);
        let (a, b) = (n / &scale, n % &scale);
        enc(&a, 16, 1, &mut id);
        id.push(SEPARATOR as char);
        enc(&b, 16, h, &mut id);
        id.extend(std::iter::repeat(SEPARATOR as char).take(digits - h - 2));
    } else if n < &version.p4 {
        let m = n - &p + 1u32;
        let scale = pow16(digits - 3);
        let (a, b) = (&m / &scale, &m % &scale);
        enc(&a, 64, 2, &mut id);
        id.push(SEPARATOR as char);
        enc(&b, 16, digits - 3, &mut id);
    } else {
        enc(&(n - &version.p4 + 1u32), 64, digits, &mut id);
    }
    id
}

/// Parses a canonical id; its length selects the version.
pub fn rank_from_id(id: &str) -> Result<(&'static GroupVersion, BigUint)> {
    if !id.is_ascii() {
        return Err(wrong(id, "Non-ASCII identifier"));
    }
    let version = GroupVersion::by_digits(id.len())
        .ok_or_else(|| wrong(id, &format!("Wrong identifier length: {}", id.len())))?;
    let s = id.as_bytes();
    let digits = version.digits;
    let p = BigUint::from(version.p);

    let (n, lower, upper) = if s[1] == SEPARATOR {
        let h = version.hexsize();
        if s[2 + h..].iter().any(|&c| c != SEPARATOR) {
            return Err(wrong(id, "Central id must end in separators"));
        }
        let a = dec(&s[..1], 16).ok_or_else(|| wrong(id, "Invalid symbol"))?;
        let b = dec(&s[2..2 + h], 16).ok_or_else(|| wrong(id, "Invalid symbol"))?;
        (a * pow16(h) + b, BigUint::one(), &p - 1u32)
    } else if s[2] == SEPARATOR {
        let a = dec(&s[..2], 64).ok_or_else(|| wrong(id, "Invalid symbol"))?;
        let b = dec(&s[3..], 16).ok_or_else(|| wrong(id, "Invalid symbol"))?;
        (a * pow16(digits - 3) + b + &p - 1u32, p.clone(), &version.p4 - 1u32)
    } else if !s.contains(&SEPARATOR) {
        let n = dec(s, 64).ok_or_else(|| wrong(id, "Invalid symbol"))?;
        if n.is_zero() {
            return Ok((version, n));
        }
        (n + &version.p4 - 1u32, version.p4.clone(), &version.p6 - 1u32)
    } else {
        return Err(wrong(id, "Invalid position for '_'"));
    };

    if n < lower || n > upper {
        return Err(wrong(
            id,
            &format!("Rank {n} outside allowed range for its element kind: [{lower};{upper}]"),
        ));
    }
    Ok((version, n))
}

/// Binary expansion of the rank, left-padded to six bits per id digit.
pub fn bits_from_rank(n: &BigUint, version: &GroupVersion) -> String {
    format!("{:0width$b}", n, width = version.bit_len())
}
