// src/groups.rs
// Group versions: UT(4, p) for a handful of fixed primes.
// A version is selected by the length of the textual identifier it produces.

use num_bigint::BigUint;
use std::fmt;
use std::sync::OnceLock;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Digit count of the version used when none is given.
pub const DEFAULT_DIGITS: usize = 40;

/// Number of registered group versions.
pub const VERSIONS: usize = 4;

struct Params {
    p: u64,
    digits: usize,
    bytes: usize,
    samples: [&'static str; 6],
}

// Boundary samples: first/last central, first/last intermediate, first/last generic.
const PARAMS: [Params; VERSIONS] = [
    Params {
        p: 65521,
        digits: 16,
        bytes: 12,
        samples: [
            "0_100___________",
            "f_0ff___________",
            "00_1000000000000",
            "Y._0d5c34bc54504",
            "1000000000000000",
            "wzMzLecAryfbdoW.",
        ],
    },
    Params {
        p: 4294967291,
        digits: 32,
        bytes: 24,
        samples: [
            "0_1000000_______________________",
            "f_affffff_______________________",
            "00_10000000000000000000000000000",
            ".._67200000b0efffff59000000cefff",
            "10000000000000000000000000000000",
            "oG300obK..f2A000gp...nn000wU....",
        ],
    },
    Params {
        p: 1099511627689,
        digits: 40,
        bytes: 30,
        samples: [
            "0_100000000_____________________________",
            "f_8afffffff_____________________________",
            "00_1000000000000000000000000000000000000",
            ".._87c2a630003eec7dffff561b0000004aeffff",
            "1000000000000000000000000000000000000000",
            "g-8KOjCQREq2Vz8VTc30gLMd..vvX6000ov.....",
        ],
    },
    Params {
        p: 18446744073709551557,
        digits: 64,
        bytes: 48,
        samples: [
            "0_100000000000000_______________________________________________",
            "f_4cfffffffffffff_______________________________________________",
            "00_1000000000000000000000000000000000000000000000000000000000000",
            ".._ca5e8b00000000003f673fffffffffff591500000000000041fffffffffff",
            "1000000000000000000000000000000000000000000000000000000000000000",
            "owLrhD0000wO2Z50.....z08lH000000MelM......vZb30000000UF.........",
        ],
    },
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

pub struct GroupVersion {
    pub p: u64,
    pub p4: BigUint,
    pub p6: BigUint,
    pub digits: usize,
    pub bytes: usize,
    pub first_p: &'static str,
    pub last_p: &'static str,
    pub first_p4: &'static str,
    pub last_p4: &'static str,
    pub first_p6: &'static str,
    pub last_p6: &'static str,
    pub(crate) slot: usize,
}

static REGISTRY: OnceLock<Vec<GroupVersion>> = OnceLock::new();

fn registry() -> &'static [GroupVersion] {
    REGISTRY.get_or_init(|| {
        tracing::debug!(versions = PARAMS.len(), "initialising group registry");
        PARAMS
            .iter()
            .enumerate()
            .map(|(slot, params)| {
                let p = BigUint::from(params.p);
                let [first_p, last_p, first_p4, last_p4, first_p6, last_p6] = params.samples;
                GroupVersion {
                    p: params.p,
                    p4: p.pow(4),
                    p6: p.pow(6),
                    digits: params.digits,
                    bytes: params.bytes,
                    first_p,
                    last_p,
                    first_p4,
                    last_p4,
                    first_p6,
                    last_p6,
                    slot,
                }
            })
            .collect()
    })
}

impl GroupVersion {
    /// Looks up the version whose identifiers are `digits` symbols long.
    pub fn by_digits(digits: usize) -> Option<&'static GroupVersion> {
        registry().iter().find(|v| v.digits == digits)
    }

    pub fn all() -> &'static [GroupVersion] {
        registry()
    }

    pub fn ut16_4() -> &'static GroupVersion {
        &registry()[0]
    }

    pub fn ut32_4() -> &'static GroupVersion {
        &registry()[1]
    }

    pub fn ut40_4() -> &'static GroupVersion {
        &registry()[2]
    }

    pub fn ut64_4() -> &'static GroupVersion {
        &registry()[3]
    }

    pub fn default_version() -> &'static GroupVersion {
        Self::ut40_4()
    }

    /// Number of hex digits carried by a central identifier.
    pub fn hexsize(&self) -> usize {
        self.digits / 4 - 1
    }

    /// Symbol count of the short (base-777) identifier.
    pub fn sid_len(&self) -> usize {
        self.digits * 5 / 8
    }

    pub fn bit_len(&self) -> usize {
        self.digits * 6
    }
}

impl PartialEq for GroupVersion {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for GroupVersion {}

impl fmt::Debug for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UT{}_4(p={})", self.digits, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_match_published_table() {
        let v = GroupVersion::ut16_4();
        assert_eq!(v.p4.to_string(), "18429861372428076481");
        assert_eq!(v.p6.to_string(), "79119421429263970001791209121");
        let v = GroupVersion::ut32_4();
        assert_eq!(v.p4.to_string(), "340282365336375215945099464469838299761");
        let v = GroupVersion::ut40_4();
        assert_eq!(
            v.p6.to_string(),
            "1766847063939562670646036165286872353986524172769430561878277294118845361"
        );
    }

    #[test]
    fn lookup_by_length() {
        for digits in [16, 32, 40, 64] {
            let v = GroupVersion::by_digits(digits).unwrap();
            assert_eq!(v.digits, digits);
            assert_eq!(v.bytes * 4 / 3, digits);
            assert_eq!(v.first_p.len(), digits);
            assert_eq!(v.last_p6.len(), digits);
        }
        assert!(GroupVersion::by_digits(41).is_none());
        assert_eq!(GroupVersion::default_version().digits, DEFAULT_DIGITS);
    }
}
