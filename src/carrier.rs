//! Carriers: the element types relations range over.
//!
//! A relation `Term<A, B>` can be built over any [`Element`] types, but
//! quantifying over a carrier (the `∃` hidden in composition, the `∀` in an
//! inclusion check) needs an enumeration of it. That capability is explicit:
//!
//! - [`Finite`] types carry a canonical enumeration of all their values
//! - [`Carrier`] is an enumeration supplied by the caller, e.g. `{0, 1}` as a
//!   subset of `u8`
//!
//! Composite carriers are built with [`Carrier::product`] and [`Carrier::sum`],
//! mirroring the pair and [`Sum`] types that product/coproduct terms produce.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::error::{CheckError, Result};

/// Bound on everything a relation can relate.
pub trait Element: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Binary sum (disjoint union) of two carriers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sum<L, R> {
    Inl(L),
    Inr(R),
}

impl<L, R> Sum<L, R> {
    pub fn is_inl(&self) -> bool {
        matches!(self, Sum::Inl(_))
    }

    pub fn is_inr(&self) -> bool {
        matches!(self, Sum::Inr(_))
    }
}

/// The finite type `{0, 1, ..., N - 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fin<const N: usize>(usize);

impl<const N: usize> Fin<N> {
    /// `None` when `i >= N`.
    pub fn new(i: usize) -> Option<Self> {
        (i < N).then_some(Fin(i))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// All values in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).map(Fin)
    }
}

impl<const N: usize> From<Fin<N>> for usize {
    fn from(f: Fin<N>) -> usize {
        f.0
    }
}

/// A type whose values can be enumerated in finite time.
///
/// Composition over a `Finite` intermediate type and equivalence checks over
/// `Finite` domains need no caller-supplied carrier.
pub trait Finite: Element {
    fn carrier() -> Carrier<Self>;
}

impl Finite for () {
    fn carrier() -> Carrier<Self> {
        Carrier::new([()])
    }
}

impl Finite for bool {
    fn carrier() -> Carrier<Self> {
        Carrier::new([false, true])
    }
}

impl<const N: usize> Finite for Fin<N> {
    fn carrier() -> Carrier<Self> {
        Carrier::new(Fin::all())
    }
}

impl<T: Finite> Finite for Option<T> {
    fn carrier() -> Carrier<Self> {
        let inner = T::carrier();
        Carrier::new(std::iter::once(None).chain(inner.iter().cloned().map(Some)))
    }
}

impl<A: Finite, B: Finite> Finite for (A, B) {
    fn carrier() -> Carrier<Self> {
        A::carrier().product(&B::carrier())
    }
}

impl<L: Finite, R: Finite> Finite for Sum<L, R> {
    fn carrier() -> Carrier<Self> {
        L::carrier().sum(&R::carrier())
    }
}

/// An explicit finite enumeration of (a subset of) a carrier type.
///
/// Elements are kept in insertion order with duplicates dropped. Cloning is
/// cheap: the element set is shared.
pub struct Carrier<T> {
    elements: Arc<IndexSet<T>>,
}

impl<T> Clone for Carrier<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Carrier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Element> Carrier<T> {
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: Arc::new(elements.into_iter().collect()),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Pull at most `limit` items from `elements`, failing as soon as the
    /// iterator yields one more. Duplicates count against the limit, so this
    /// returns on any unbounded iterator, repeating or not.
    pub fn bounded(elements: impl IntoIterator<Item = T>, limit: usize) -> Result<Self> {
        let mut set = IndexSet::new();
        for (pulled, element) in elements.into_iter().enumerate() {
            if pulled == limit {
                tracing::warn!(limit, "carrier enumeration exceeded its bound");
                return Err(CheckError::CarrierTooLarge { limit });
            }
            set.insert(element);
        }
        Ok(Self {
            elements: Arc::new(set),
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }

    /// Carrier of pairs, in row-major order.
    pub fn product<U: Element>(&self, other: &Carrier<U>) -> Carrier<(T, U)> {
        Carrier::new(pairs(self, other).map(|(t, u)| (t.clone(), u.clone())))
    }

    /// Carrier of the disjoint union: all `Inl`s, then all `Inr`s.
    pub fn sum<U: Element>(&self, other: &Carrier<U>) -> Carrier<Sum<T, U>> {
        Carrier::new(
            self.iter()
                .cloned()
                .map(Sum::Inl)
                .chain(other.iter().cloned().map(Sum::Inr)),
        )
    }

    pub fn square(&self) -> Carrier<(T, T)> {
        self.product(self)
    }
}

impl<T: Element> FromIterator<T> for Carrier<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Carrier::new(iter)
    }
}

/// Iterator over the Cartesian product of two carriers (odometer order).
pub struct Pairs<'a, A, B> {
    domain: &'a IndexSet<A>,
    codomain: &'a IndexSet<B>,
    row: usize,
    col: usize,
}

impl<'a, A, B> Iterator for Pairs<'a, A, B> {
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        if self.codomain.is_empty() {
            return None;
        }
        let a = self.domain.get_index(self.row)?;
        let b = self.codomain.get_index(self.col)?;

        // Advance
        self.col += 1;
        if self.col == self.codomain.len() {
            self.col = 0;
            self.row += 1;
        }

        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.domain.len().saturating_mul(self.codomain.len());
        let done = self
            .row
            .saturating_mul(self.codomain.len())
            .saturating_add(self.col);
        let remaining = total.saturating_sub(done);
        (remaining, Some(remaining))
    }
}

/// Every `(a, b)` with `a` in `domain` and `b` in `codomain`.
pub fn pairs<'a, A, B>(domain: &'a Carrier<A>, codomain: &'a Carrier<B>) -> Pairs<'a, A, B> {
    Pairs {
        domain: &domain.elements,
        codomain: &codomain.elements,
        row: 0,
        col: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fin_bounds() {
        assert_eq!(Fin::<3>::new(2).map(Fin::index), Some(2));
        assert_eq!(Fin::<3>::new(3), None);
        assert_eq!(Fin::<0>::all().count(), 0);
        assert_eq!(<Fin<4> as Finite>::carrier().len(), 4);
    }

    #[test]
    fn test_carrier_dedups_in_order() {
        let c = Carrier::new([3u8, 1, 3, 2, 1]);
        assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert!(c.contains(&2));
        assert!(!c.contains(&0));
    }

    #[test]
    fn test_composite_carriers() {
        let bits = bool::carrier();
        assert_eq!(<(bool, bool)>::carrier().len(), 4);
        assert_eq!(<Sum<bool, ()>>::carrier().len(), 3);
        assert_eq!(<Option<bool>>::carrier().len(), 3);

        let sum = bits.sum(&<()>::carrier());
        let tags: Vec<bool> = sum.iter().map(Sum::is_inl).collect();
        assert_eq!(tags, vec![true, true, false]);
    }

    #[test]
    fn test_pairs_row_major() {
        let a = Carrier::new([0u8, 1]);
        let b = Carrier::new(['x', 'y', 'z']);
        let ps: Vec<(u8, char)> = pairs(&a, &b).map(|(x, y)| (*x, *y)).collect();
        assert_eq!(
            ps,
            vec![(0, 'x'), (0, 'y'), (0, 'z'), (1, 'x'), (1, 'y'), (1, 'z')]
        );
        assert_eq!(pairs(&a, &b).size_hint(), (6, Some(6)));

        let mut ps = pairs(&a, &b);
        ps.nth(3);
        assert_eq!(ps.size_hint(), (2, Some(2)));
        assert_eq!(ps.count(), 2);
    }

    #[test]
    fn test_pairs_with_empty_side() {
        let a = Carrier::new([0u8, 1]);
        let none: Carrier<u8> = Carrier::empty();
        assert_eq!(pairs(&a, &none).count(), 0);
        assert_eq!(pairs(&none, &a).count(), 0);
    }

    #[test]
    fn test_bounded_fails_fast_on_unbounded_iterator() {
        let err = Carrier::bounded(0u64.., 16).unwrap_err();
        assert!(matches!(err, CheckError::CarrierTooLarge { limit: 16 }));

        let ok = Carrier::bounded([1u8, 1, 2], 3).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(Carrier::bounded([1u8, 1, 2], 2).is_err());
    }

    #[test]
    fn test_bounded_fails_fast_on_repeating_iterator() {
        let err = Carrier::bounded(std::iter::repeat(7u8), 16).unwrap_err();
        assert_eq!(err, CheckError::CarrierTooLarge { limit: 16 });

        let err = Carrier::bounded([0u8, 1].into_iter().cycle(), 5).unwrap_err();
        assert_eq!(err, CheckError::CarrierTooLarge { limit: 5 });
    }
}
