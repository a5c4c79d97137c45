// src/config.rs
// Explicit settings for creating and showing hoshes.
// Nothing in the algebra reads this; callers pass it where it is needed.

use crate::error::{HoshError, Result};
use crate::groups::{GroupVersion, DEFAULT_DIGITS};
use crate::hosh::Hosh;
use crate::kind::ElementKind;
use num_bigint::BigUint;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub version: &'static GroupVersion,
    pub inducer: ElementKind, // kind given to hashed bytes
    pub short: bool,          // render the base-777 id
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: GroupVersion::default_version(),
            inducer: ElementKind::Generic,
            short: false,
        }
    }
}

impl Config {
    /// Settings for the version whose ids are `digits` long.
    pub fn with_digits(digits: usize) -> Result<Self> {
        let version = GroupVersion::by_digits(digits).ok_or_else(|| {
            HoshError::WrongIdentifier(format!(
                "No group version with {digits} digits (default is {DEFAULT_DIGITS})"
            ))
        })?;
        Ok(Config { version, ..Config::default() })
    }

    pub fn inducing(mut self, kind: ElementKind) -> Self {
        self.inducer = kind;
        self
    }

    pub fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    pub fn hosh(&self, blob: &[u8]) -> Hosh {
        Hosh::from_blob(blob, self.inducer, self.version)
    }

    /// Identity whose byte operands are hashed with this inducer.
    pub fn identity(&self) -> Hosh {
        Hosh::identity(self.version).with_inducer(self.inducer)
    }

    pub fn from_rank(&self, n: &BigUint) -> Result<Hosh> {
        Hosh::from_rank(n, self.version)
    }

    pub fn from_cells(&self, cells: &[u64]) -> Result<Hosh> {
        Hosh::from_cells(cells, self.version)
    }

    /// Parses `id`, which must belong to this version.
    pub fn from_id(&self, id: &str) -> Result<Hosh> {
        let h = Hosh::from_id(id)?;
        if h.version() != self.version {
            return Err(HoshError::WrongVersion {
                left: self.version.digits,
                right: h.version().digits,
            });
        }
        Ok(h)
    }

    /// Plain-text form of `h`.
    pub fn render(&self, h: &Hosh) -> String {
        if self.short {
            h.sid().to_string()
        } else {
            h.id().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.version.digits, 40);
        assert_eq!(c.inducer, ElementKind::Generic);
        assert_eq!(c.render(&c.hosh(b"asd")), "LsxCajlK830AKqtU5v0C9YV9bQnZJ1wG3qslW9Z6");
        let s = c.clone().short(true);
        assert_eq!(s.render(&s.hosh(b"asd")), "ÓӭϳơӨǹƹOäĎëϊɜāҙĉýŮƵŖĠíҺӞÀ");
    }

    #[test]
    fn inducer_reaches_identity() {
        let c = Config::default().inducing(ElementKind::Central);
        assert_eq!(c.hosh(b"654").id(), "9_6a78c0056_____________________________");
        assert_eq!(c.identity().try_mul(b"654").unwrap(), c.hosh(b"654"));
        let c = Config::default().inducing(ElementKind::Intermediate);
        assert_eq!(c.identity().try_mul(b"654").unwrap().id(), "eW_aebeb57cf1455dccdc1bd990950a03b0f2e29");
    }

    #[test]
    fn version_selection() {
        let c = Config::with_digits(64).unwrap();
        assert_eq!(c.identity().id(), "0".repeat(64));
        assert!(matches!(Config::with_digits(41), Err(HoshError::WrongIdentifier(_))));
        let other = Hosh::hash(b"x");
        assert!(matches!(c.from_id(other.id()), Err(HoshError::WrongVersion { left: 64, right: 40 })));
        assert_eq!(c.from_rank(&BigUint::from(5u32)).unwrap().version(), c.version);
        assert!(c.from_cells(&[1, 2, 3, 4, 5, 6]).is_ok());
    }
}
