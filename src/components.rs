// src/components.rs
// Decomposition of an element into factors (or summands) that recombine to it.
//
// Component i < n - 1 is the generic element hashed from "<id>-<i>"; the last
// one is solved so the ordered product (or the sum) gives back the element.

use crate::error::{HoshError, Result};
use crate::hosh::Hosh;
use crate::kind::ElementKind;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Generated components kept per element.
pub const COMPONENT_CACHE_SIZE: usize = 100;

// ============================================================================
// CACHE
// ============================================================================

#[derive(Default)]
struct CacheInner {
    order: VecDeque<usize>,
    entries: HashMap<usize, Hosh>,
}

/// Bounded memo of generated components, evicting in insertion order.
#[derive(Default)]
pub struct ComponentCache {
    inner: Mutex<CacheInner>,
}

impl ComponentCache {
    fn get_or_insert_with(&self, index: usize, make: impl FnOnce() -> Hosh) -> Hosh {
        let mut inner = self.inner.lock();
        if let Some(h) = inner.entries.get(&index) {
            return h.clone();
        }
        let h = make();
        inner.order.push_back(index);
        inner.entries.insert(index, h.clone());
        tracing::trace!(index, cached = inner.entries.len(), "component cached");
        if inner.entries.len() > COMPONENT_CACHE_SIZE {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                tracing::trace!(evicted = oldest, "component cache full");
            }
        }
        h
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// DECOMPOSITION
// ============================================================================

#[derive(Clone, Copy)]
enum Law {
    Product,
    Sum,
}

impl Law {
    fn combine(self, a: &Hosh, b: &Hosh) -> Hosh {
        match self {
            Law::Product => a * b,
            Law::Sum => a + b,
        }
    }

    fn invert(self, a: &Hosh) -> Hosh {
        match self {
            Law::Product => a.inv(),
            Law::Sum => a.additive_inverse(),
        }
    }
}

fn check_range(start: usize, stop: usize, n: usize) -> Result<()> {
    if n == 0 || start > stop || stop > n {
        return Err(HoshError::WrongOperands(format!(
            "Expected 0 <= start ({start}) <= stop ({stop}) <= n ({n}) and n > 0."
        )));
    }
    Ok(())
}

impl Hosh {
    // Free component i; does not depend on n or on the composition law.
    fn generated(&self, index: usize) -> Hosh {
        self.component_cache.get_or_insert_with(index, || {
            let blob = format!("{}-{}", self.id(), index);
            Hosh::from_blob(blob.as_bytes(), ElementKind::Generic, self.version())
        })
    }

    fn decompose(&self, start: usize, stop: usize, n: usize, law: Law) -> Result<Vec<Hosh>> {
        check_range(start, stop, n)?;
        let free = if stop == n { n - 1 } else { stop };
        let mut acc = self.neutral();
        let mut out = Vec::with_capacity(stop - start);
        for i in 0..free {
            let h = self.generated(i);
            acc = law.combine(&acc, &h);
            if i >= start {
                out.push(h);
            }
        }
        if stop == n && start < n {
            out.push(law.combine(&law.invert(&acc), self));
        }
        Ok(out)
    }

    /// Components `start..stop` of the `n`-factor decomposition, whose
    /// ordered product over `0..n` equals `self`.
    pub fn components(&self, start: usize, stop: usize, n: usize) -> Result<Vec<Hosh>> {
        self.decompose(start, stop, n, Law::Product)
    }

    /// Like [`Hosh::components`], recombined by addition.
    pub fn additive_components(&self, start: usize, stop: usize, n: usize) -> Result<Vec<Hosh>> {
        self.decompose(start, stop, n, Law::Sum)
    }

    /// Component `i` of the `n`-factor decomposition.
    pub fn component(&self, i: usize, n: usize) -> Result<Hosh> {
        self.single(i, n, Law::Product)
    }

    pub fn additive_component(&self, i: usize, n: usize) -> Result<Hosh> {
        self.single(i, n, Law::Sum)
    }

    fn single(&self, i: usize, n: usize, law: Law) -> Result<Hosh> {
        if i >= n {
            return Err(HoshError::WrongOperands(format!(
                "Component index ({i}) must be lower than the number of components ({n})."
            )));
        }
        if i + 1 < n {
            return Ok(self.generated(i));
        }
        let mut last = self.decompose(i, n, n, law)?;
        last.pop()
            .ok_or_else(|| HoshError::WrongOperands(format!("No component {i} out of {n}.")))
    }

    /// Factor `i` of `self = r^1 * r^2 * ... * r^n` with `r` the
    /// `n(n+1)/2`-th root of `self`. The factors all commute.
    pub fn power_component(&self, i: usize, n: usize) -> Result<Hosh> {
        if i >= n {
            return Err(HoshError::WrongOperands(format!(
                "Component index ({i}) must be lower than the number of components ({n})."
            )));
        }
        if n == 1 {
            return Ok(self.clone());
        }
        let n = n as u64;
        let exp = n
            .checked_add(1)
            .and_then(|m| m.checked_mul(n))
            .map(|m| m / 2)
            .ok_or_else(|| HoshError::WrongOperands(format!("Too many power components: {n}.")))?;
        self.root(exp)?.pow(i as u64 + 1)
    }
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// Ordered product of `parts`.
pub fn compose(parts: &[Hosh]) -> Result<Hosh> {
    fold(parts, |acc, h| acc.try_mul(h))
}

/// Sum of `parts`.
pub fn compose_additive(parts: &[Hosh]) -> Result<Hosh> {
    fold(parts, |acc, h| acc.try_add(h))
}

fn fold(parts: &[Hosh], op: impl Fn(&Hosh, &Hosh) -> Result<Hosh>) -> Result<Hosh> {
    let (first, rest) = parts
        .split_first()
        .ok_or_else(|| HoshError::WrongOperands("Nothing to compose.".to_string()))?;
    rest.iter().try_fold(first.clone(), |acc, h| op(&acc, h))
}
