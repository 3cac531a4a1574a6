//! Denotational semantics: terms to membership predicates.
//!
//! [`eval`] compiles a term once into a tree of closures. The resulting
//! [`Predicate`] is pure and can be called any number of times, from any
//! thread. Only composition quantifies: its `∃` ranges over the intermediate
//! carrier captured when the compose node was built.

use std::fmt;
use std::sync::Arc;

use crate::carrier::{Carrier, Element, Sum};
use crate::term::{Node, Term};

/// A pure two-place membership test: is `a` related to `b`?
pub struct Predicate<A, B> {
    f: Arc<dyn Fn(&A, &B) -> bool + Send + Sync>,
}

impl<A, B> Clone for Predicate<A, B> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<A, B> fmt::Debug for Predicate<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl<A: 'static, B: 'static> Predicate<A, B> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A, &B) -> bool + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    pub fn constant(value: bool) -> Self {
        Self::new(move |_, _| value)
    }

    #[inline]
    pub fn holds(&self, a: &A, b: &B) -> bool {
        (self.f)(a, b)
    }
}

/// Compile a term to its predicate.
///
/// Total and pure: the term is only read, and two calls on the same term give
/// pointwise identical predicates.
pub fn eval<A: Element, B: Element>(term: &Term<A, B>) -> Predicate<A, B> {
    match term.node() {
        Node::Atomic(atom) => atom.predicate.clone(),

        Node::Pair(a, b) => {
            let (a, b) = (a.clone(), b.clone());
            Predicate::new(move |x, y| *x == a && *y == b)
        }

        Node::Compose(c) | Node::Product(c) | Node::Coproduct(c) => c.predicate(),

        Node::Converse(inner) => {
            let p = eval(inner);
            Predicate::new(move |a, b| p.holds(b, a))
        }

        Node::Complement(inner) => {
            let p = eval(inner);
            Predicate::new(move |a, b| !p.holds(a, b))
        }

        Node::Full => Predicate::constant(true),

        Node::Copy(shape)
        | Node::Collapse(shape)
        | Node::First(shape)
        | Node::Second(shape)
        | Node::Left(shape)
        | Node::Right(shape) => {
            let holds = shape.holds;
            Predicate::new(move |a, b| holds(a, b))
        }
    }
}

/// `∃ c ∈ via. r(a, c) ∧ s(c, b)`
pub(crate) fn compose<A, C, B>(r: &Term<A, C>, s: &Term<C, B>, via: &Carrier<C>) -> Predicate<A, B>
where
    A: Element,
    C: Element,
    B: Element,
{
    let (r, s, via) = (eval(r), eval(s), via.clone());
    Predicate::new(move |a, b| via.iter().any(|c| r.holds(a, c) && s.holds(c, b)))
}

/// `r(a1, b1) ∧ s(a2, b2)`
pub(crate) fn product<A1, A2, B1, B2>(
    r: &Term<A1, B1>,
    s: &Term<A2, B2>,
) -> Predicate<(A1, A2), (B1, B2)>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    let (r, s) = (eval(r), eval(s));
    Predicate::new(move |(a1, a2): &(A1, A2), (b1, b2): &(B1, B2)| {
        r.holds(a1, b1) && s.holds(a2, b2)
    })
}

/// `r` within the left branch, `s` within the right, false across.
pub(crate) fn coproduct<A1, A2, B1, B2>(
    r: &Term<A1, B1>,
    s: &Term<A2, B2>,
) -> Predicate<Sum<A1, A2>, Sum<B1, B2>>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    let (r, s) = (eval(r), eval(s));
    Predicate::new(move |a: &Sum<A1, A2>, b: &Sum<B1, B2>| match (a, b) {
        (Sum::Inl(a), Sum::Inl(b)) => r.holds(a, b),
        (Sum::Inr(a), Sum::Inr(b)) => s.holds(a, b),
        _ => false,
    })
}

// ============================================================================
// Structural variants
// ============================================================================

pub(crate) fn diagonal<A: Element>(a: &A, (a1, a2): &(A, A)) -> bool {
    a == a1 && a == a2
}

pub(crate) fn codiagonal<C: Element>(c: &Sum<C, C>, b: &C) -> bool {
    match c {
        Sum::Inl(a) | Sum::Inr(a) => a == b,
    }
}

pub(crate) fn project_first<C: Element, D: Element>((x, _): &(C, D), z: &C) -> bool {
    x == z
}

pub(crate) fn project_second<C: Element, D: Element>((_, y): &(C, D), z: &D) -> bool {
    y == z
}

pub(crate) fn inject_left<A: Element, D: Element>(a: &A, b: &Sum<A, D>) -> bool {
    matches!(b, Sum::Inl(x) if x == a)
}

pub(crate) fn inject_right<A: Element, D: Element>(a: &A, b: &Sum<D, A>) -> bool {
    matches!(b, Sum::Inr(x) if x == a)
}
