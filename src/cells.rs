// src/cells.rs
// Arithmetic over UT(4, p): 4x4 upper unitriangular matrices modulo a prime.
//
// An element is kept as six cells [a5, a4, a3, a2, a1, a0] laid out as
//
//   1  a4 a1 a0
//   0  1  a2 a3
//   0  0  1  a5
//   0  0  0  1
//
// a4, a2, a5 sit on the first superdiagonal (degree 1), a1, a3 on the second
// (degree 2) and a0 in the corner (degree 3).

use crate::error::{HoshError, Result};
use itertools::izip;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

pub type Cells = [u64; 6];

pub const IDENTITY: Cells = [0; 6];

// ============================================================================
// 1. Scalar arithmetic modulo p (p < 2^64, products widened to u128)
// ============================================================================

#[inline(always)]
fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 + b as u128) % p as u128) as u64
}

#[inline(always)]
fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

#[inline(always)]
fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

#[inline(always)]
fn neg_mod(a: u64, p: u64) -> u64 {
    if a == 0 {
        0
    } else {
        p - a
    }
}

pub fn pow_mod(base: u64, exp: u64, p: u64) -> u64 {
    let mut res = 1 % p;
    let mut base = base % p;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            res = mul_mod(res, base, p);
        }
        base = mul_mod(base, base, p);
        e >>= 1;
    }
    res
}

// Fermat: p is prime, a is not a multiple of p.
fn inv_mod(a: u64, p: u64) -> u64 {
    pow_mod(a, p - 2, p)
}

// ============================================================================
// 2. Group law
// ============================================================================

/// Matrix product `a * b`.
pub fn mul(a: &Cells, b: &Cells, p: u64) -> Cells {
    [
        add_mod(a[0], b[0], p),
        add_mod(a[1], b[1], p),
        add_mod(add_mod(a[2], b[2], p), mul_mod(a[3], b[0], p), p),
        add_mod(a[3], b[3], p),
        add_mod(add_mod(a[4], b[4], p), mul_mod(a[1], b[3], p), p),
        add_mod(
            add_mod(a[5], b[5], p),
            add_mod(mul_mod(a[1], b[2], p), mul_mod(a[4], b[0], p), p),
            p,
        ),
    ]
}

/// Multiplicative inverse, closed form.
pub fn inv(m: &Cells, p: u64) -> Cells {
    let a4a2 = mul_mod(m[1], m[3], p);
    let corner = add_mod(mul_mod(m[1], m[2], p), mul_mod(m[4], m[0], p), p);
    [
        neg_mod(m[0], p),
        neg_mod(m[1], p),
        sub_mod(mul_mod(m[3], m[0], p), m[2], p),
        neg_mod(m[3], p),
        sub_mod(a4a2, m[4], p),
        sub_mod(sub_mod(corner, mul_mod(a4a2, m[0], p), p), m[5], p),
    ]
}

/// `m^k` by square-and-multiply; k = 0 gives the identity.
pub fn pow(m: &Cells, k: u64, p: u64) -> Cells {
    let mut res = IDENTITY;
    let mut base = *m;
    let mut e = k;
    while e > 0 {
        if e & 1 == 1 {
            res = mul(&res, &base, p);
        }
        base = mul(&base, &base, p);
        e >>= 1;
    }
    res
}

/// The unique `r` with `r^k == m`.
///
/// Writing `r = I + N`, `r^k = I + kN + C(k,2)N^2 + C(k,3)N^3` since `N^4 = 0`,
/// so each degree solves linearly once the lower degrees are known.
pub fn root(m: &Cells, k: u64, p: u64) -> Result<Cells> {
    if k == 0 || k % p == 0 {
        return Err(HoshError::WrongOperands(format!(
            "Root index ({k}) must be positive and coprime to {p}."
        )));
    }
    if k == 1 {
        return Ok(*m);
    }
    let divk = inv_mod(k % p, p);
    let c1 = ((k as u128 * (k as u128 - 1) / 2) % p as u128) as u64;
    let c2 = {
        let k = BigUint::from(k);
        let c = &k * (&k - 1u32) * (&k - 2u32) / 6u32 % p;
        c.iter_u64_digits().next().unwrap_or(0)
    };

    let mut r = IDENTITY;
    // Degree 1
    r[1] = mul_mod(m[1], divk, p);
    r[3] = mul_mod(m[3], divk, p);
    r[0] = mul_mod(m[0], divk, p);
    // Degree 2
    r[4] = mul_mod(sub_mod(m[4], mul_mod(c1, mul_mod(r[1], r[3], p), p), p), divk, p);
    r[2] = mul_mod(sub_mod(m[2], mul_mod(c1, mul_mod(r[3], r[0], p), p), p), divk, p);
    // Degree 3
    let quad = add_mod(mul_mod(r[1], r[2], p), mul_mod(r[4], r[0], p), p);
    let cubic = mul_mod(mul_mod(r[1], r[3], p), r[0], p);
    let rest = add_mod(mul_mod(c1, quad, p), mul_mod(c2, cubic, p), p);
    r[5] = mul_mod(sub_mod(m[5], rest, p), divk, p);
    Ok(r)
}

// ============================================================================
// 3. Abelian structure: matrix addition modulo p
// ============================================================================

pub fn add(a: &Cells, b: &Cells, p: u64) -> Cells {
    let mut out = IDENTITY;
    for (o, &x, &y) in izip!(&mut out, a, b) {
        *o = add_mod(x, y, p);
    }
    out
}

pub fn sub(a: &Cells, b: &Cells, p: u64) -> Cells {
    let mut out = IDENTITY;
    for (o, &x, &y) in izip!(&mut out, a, b) {
        *o = sub_mod(x, y, p);
    }
    out
}

/// Additive inverse: every cell negated on its own, no cross terms.
pub fn neg(m: &Cells, p: u64) -> Cells {
    m.map(|x| neg_mod(x, p))
}

/// Exchanges a5 and a2. Self-inverse.
pub fn swap(m: &Cells) -> Cells {
    let mut out = *m;
    out.swap(0, 3);
    out
}

// ============================================================================
// 4. Rank: mixed radix p, a5 most significant, a0 least
// ============================================================================

pub fn to_rank(m: &Cells, p: u64) -> BigUint {
    m.iter().fold(BigUint::zero(), |acc, &cell| acc * p + cell)
}

// Lowest six base-p digits of n, plus whatever is left above them.
fn split(n: &BigUint, p: u64) -> (Cells, BigUint) {
    let modulus = BigUint::from(p);
    let mut rest = n.clone();
    let mut cells = IDENTITY;
    for cell in cells.iter_mut().rev() {
        let (q, r) = rest.div_rem(&modulus);
        *cell = r.iter_u64_digits().next().unwrap_or(0);
        rest = q;
    }
    (cells, rest)
}

pub fn from_rank(n: &BigUint, p: u64) -> Result<Cells> {
    match split(n, p) {
        (cells, rest) if rest.is_zero() => Ok(cells),
        _ => Err(HoshError::ElementTooHigh(format!("{n} >= {p}^6"))),
    }
}

/// Same as [`from_rank`] for a rank already known to be below `p^6`.
pub(crate) fn from_reduced_rank(n: &BigUint, p: u64) -> Cells {
    split(n, p).0
}

pub fn check(m: &Cells, p: u64) -> Result<()> {
    match m.iter().max() {
        Some(&value) if value >= p => Err(HoshError::CellValueTooHigh { value, p }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P32: u64 = 4294967291;
    const P40: u64 = 1099511627689;

    #[test]
    fn inverse_cancels_on_both_sides() {
        let a = [51, 18340, 56, 756, 456, 344];
        let b = [781, 2340, 9870, 1234, 9134, 3134];
        assert_eq!(mul(&b, &inv(&b, P32), P32), IDENTITY);
        assert_eq!(mul(&inv(&b, P32), &b, P32), IDENTITY);
        let c = mul(&a, &b, P32);
        assert_eq!(mul(&c, &inv(&b, P32), P32), a);
    }

    #[test]
    fn inverse_is_involution() {
        let e = [42821, 772431, 428543, 443530, 42121, 7213];
        assert_eq!(inv(&inv(&e, P32), P32), e);
    }

    #[test]
    fn product_is_not_commutative() {
        let a = [51, 18340, 56, 756, 456, 344];
        let b = [781, 2340, 9870, 1234, 9134, 3134];
        assert_ne!(mul(&a, &b, P32), mul(&b, &a, P32));
    }

    #[test]
    fn pow_matches_repeated_product() {
        let m = [356565433747, 1065474654747, 3646565647, 245465626545, 778334555738, 84633966983];
        let mut acc = IDENTITY;
        for k in 0..9 {
            assert_eq!(pow(&m, k, P40), acc);
            acc = mul(&acc, &m, P40);
        }
    }

    #[test]
    fn root_inverts_pow() {
        let a = [356565433747, 1065474654747, 3646565647, 245465626545, 778334555738, 84633966983];
        for k in 1..=12 {
            let r = root(&a, k, P40).unwrap();
            assert_eq!(pow(&r, k, P40), a, "k = {k}");
        }
        let big = P40 - 2;
        let r = root(&a, big, P40).unwrap();
        assert_eq!(pow(&r, big, P40), a);
    }

    #[test]
    fn root_rejects_degenerate_index() {
        let a = [1, 2, 3, 4, 5, 6];
        assert!(matches!(root(&a, 0, P40), Err(HoshError::WrongOperands(_))));
        assert!(matches!(root(&a, P40, P40), Err(HoshError::WrongOperands(_))));
        assert_eq!(root(&a, 1, P40).unwrap(), a);
    }

    #[test]
    fn additive_structure() {
        let a = [6, 5, 4, 3, 2, 1];
        let b = [9, 8, 7, 6, 5, 4];
        assert_eq!(add(&a, &b, P40), [15, 13, 11, 9, 7, 5]);
        assert_eq!(add(&a, &b, P40), add(&b, &a, P40));
        assert_eq!(sub(&add(&a, &b, P40), &b, P40), a);
        assert_eq!(
            neg(&b, P40),
            [1099511627680, 1099511627681, 1099511627682, 1099511627683, 1099511627684, 1099511627685]
        );
        assert_eq!(add(&b, &neg(&b, P40), P40), IDENTITY);
        assert_eq!(swap(&b), [6, 8, 7, 9, 5, 4]);
        assert_eq!(swap(&swap(&b)), b);
    }

    #[test]
    fn rank_round_trip() {
        let e = [42821, 772431, 428543, 443530, 42121, 7213];
        assert_eq!(from_rank(&to_rank(&e, P32), P32).unwrap(), e);
        let n: BigUint = "986723489762345987253897254295863".parse().unwrap();
        assert_eq!(to_rank(&from_rank(&n, P32).unwrap(), P32), n);
        assert_eq!(to_rank(&[0, 0, 0, 0, 0, 5], P32), BigUint::from(5u32));
    }

    #[test]
    fn rank_rejects_overflow() {
        let p6 = BigUint::from(P32).pow(6);
        assert!(matches!(from_rank(&p6, P32), Err(HoshError::ElementTooHigh(_))));
        let last = from_rank(&(p6 - 1u32), P32).unwrap();
        assert_eq!(last, [P32 - 1; 6]);
    }

    #[test]
    fn cell_bound_check() {
        assert!(check(&[0, 0, P40 - 1, 0, 0, 0], P40).is_ok());
        assert_eq!(
            check(&[0, 0, P40 + 1, 0, 0, 0], P40),
            Err(HoshError::CellValueTooHigh { value: P40 + 1, p: P40 })
        );
    }
}
