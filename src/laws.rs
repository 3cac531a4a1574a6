//! A catalogue of algebraic laws.
//!
//! A [`Law`] is a named pair of terms that should denote the same relation.
//! The constructors here instantiate each law at caller-chosen operands;
//! [`Checker::verify`](crate::equiv::Checker::verify) decides it over finite
//! carriers.

use crate::carrier::{Element, Finite, Sum};
use crate::derived::{negation, par, with};
use crate::term::{complement, compose, converse, coproduct, graph, product, Term};

/// Two terms claimed equivalent.
#[derive(Clone, Debug)]
pub struct Law<A, B> {
    pub name: &'static str,
    pub lhs: Term<A, B>,
    pub rhs: Term<A, B>,
}

impl<A, B> Law<A, B> {
    pub fn new(name: &'static str, lhs: Term<A, B>, rhs: Term<A, B>) -> Self {
        Self { name, lhs, rhs }
    }
}

/// `(r˘)˘ = r`
pub fn double_converse<A: Element, B: Element>(r: Term<A, B>) -> Law<A, B> {
    Law::new("double_converse", converse(converse(r.clone())), r)
}

/// `¬¬r = r`
pub fn double_complement<A: Element, B: Element>(r: Term<A, B>) -> Law<A, B> {
    Law::new("double_complement", complement(complement(r.clone())), r)
}

/// `(r⊥)⊥ = r`
pub fn double_negation<A: Element, B: Element>(r: Term<A, B>) -> Law<A, B> {
    Law::new("double_negation", negation(negation(r.clone())), r)
}

/// `¬(r˘) = r⊥`
pub fn negation_order<A: Element, B: Element>(r: Term<A, B>) -> Law<B, A> {
    Law::new(
        "negation_order",
        complement(converse(r.clone())),
        negation(r),
    )
}

/// `(¬r)˘ = ¬(r˘)`
pub fn negation_order_swapped<A: Element, B: Element>(r: Term<A, B>) -> Law<B, A> {
    Law::new(
        "negation_order_swapped",
        converse(complement(r.clone())),
        complement(converse(r)),
    )
}

/// `(r ; s)˘ = s˘ ; r˘`
pub fn converse_compose<A, C, B>(r: Term<A, C>, s: Term<C, B>) -> Law<B, A>
where
    A: Element,
    C: Finite,
    B: Element,
{
    Law::new(
        "converse_compose",
        converse(compose(r.clone(), s.clone())),
        compose(converse(s), converse(r)),
    )
}

/// `(r ; s) ; t = r ; (s ; t)`
pub fn compose_assoc<A, C, D, B>(r: Term<A, C>, s: Term<C, D>, t: Term<D, B>) -> Law<A, B>
where
    A: Element,
    C: Finite,
    D: Finite,
    B: Element,
{
    Law::new(
        "compose_assoc",
        compose(compose(r.clone(), s.clone()), t.clone()),
        compose(r, compose(s, t)),
    )
}

/// `(r ⊗ s)˘ = r˘ ⊗ s˘`
pub fn converse_product<A1, A2, B1, B2>(
    r: Term<A1, B1>,
    s: Term<A2, B2>,
) -> Law<(B1, B2), (A1, A2)>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    Law::new(
        "converse_product",
        converse(product(r.clone(), s.clone())),
        product(converse(r), converse(s)),
    )
}

/// `¬(r ⊗ s) = ¬r ⅋ ¬s`
pub fn complement_product<A1, A2, B1, B2>(
    r: Term<A1, B1>,
    s: Term<A2, B2>,
) -> Law<(A1, A2), (B1, B2)>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    Law::new(
        "complement_product",
        complement(product(r.clone(), s.clone())),
        par(complement(r), complement(s)),
    )
}

/// `(r ⊕ s)˘ = r˘ ⊕ s˘`
pub fn converse_coproduct<A1, A2, B1, B2>(
    r: Term<A1, B1>,
    s: Term<A2, B2>,
) -> Law<Sum<B1, B2>, Sum<A1, A2>>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    Law::new(
        "converse_coproduct",
        converse(coproduct(r.clone(), s.clone())),
        coproduct(converse(r), converse(s)),
    )
}

/// `¬(r ⊕ s) = ¬r & ¬s`
pub fn complement_coproduct<A1, A2, B1, B2>(
    r: Term<A1, B1>,
    s: Term<A2, B2>,
) -> Law<Sum<A1, A2>, Sum<B1, B2>>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    Law::new(
        "complement_coproduct",
        complement(coproduct(r.clone(), s.clone())),
        with(complement(r), complement(s)),
    )
}

/// The canonical isomorphism `A × (B + C) → (A × B) + (A × C)`, as a graph.
pub fn distributor<A: Element, B: Element, C: Element>(
) -> Term<(A, Sum<B, C>), Sum<(A, B), (A, C)>> {
    graph(|(a, bc): &(A, Sum<B, C>)| match bc {
        Sum::Inl(b) => Sum::Inl((a.clone(), b.clone())),
        Sum::Inr(c) => Sum::Inr((a.clone(), c.clone())),
    })
}

/// Product distributes over coproduct, up to [`distributor`]:
/// `(r ⊗ (s ⊕ t)) ; δ = δ ; ((r ⊗ s) ⊕ (r ⊗ t))`.
#[allow(clippy::type_complexity)]
pub fn product_distributes<A, A1, A2, B, B1, B2>(
    r: Term<A, B>,
    s: Term<A1, B1>,
    t: Term<A2, B2>,
) -> Law<(A, Sum<A1, A2>), Sum<(B, B1), (B, B2)>>
where
    A: Finite,
    A1: Finite,
    A2: Finite,
    B: Finite,
    B1: Finite,
    B2: Finite,
{
    let lhs = compose(product(r.clone(), coproduct(s.clone(), t.clone())), distributor());
    let rhs = compose(
        distributor(),
        coproduct(product(r.clone(), s), product(r, t)),
    );
    Law::new("product_distributes", lhs, rhs)
}
