//! Derived operators.
//!
//! Everything here is sugar over the primitive constructors in
//! [`crate::term`]; none of it adds an evaluation case. Each doc comment gives
//! the operator's direct characterization, which the test suite checks
//! against the evaluator.

use crate::carrier::{Carrier, Element, Finite, Sum};
use crate::term::{
    collapse, complement, compose, compose_via, converse, copy, coproduct, full, product, Term,
};

/// `(x, y)` is related to `a` iff `x = a` and `y = a`.
pub fn merge<A: Element>() -> Term<(A, A), A> {
    converse(copy())
}

/// `c` is related to `Inl(c)` and to `Inr(c)`.
pub fn split<C: Element>() -> Term<C, Sum<C, C>> {
    converse(collapse())
}

/// Linear negation: `b` is related to `a` iff `r` does not relate `a` to `b`.
///
/// Converse and complement commute, so the order here is immaterial.
pub fn negation<A: Element, B: Element>(r: Term<A, B>) -> Term<B, A> {
    converse(complement(r))
}

/// Par, the De Morgan dual of product: `r(a1, b1) ∨ s(a2, b2)`.
pub fn par<A1, A2, B1, B2>(r: Term<A1, B1>, s: Term<A2, B2>) -> Term<(A1, A2), (B1, B2)>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    negation(product(negation(r), negation(s)))
}

/// With, the De Morgan dual of coproduct: `r` on left/left, `s` on
/// right/right, and true across branches.
pub fn with<A1, A2, B1, B2>(r: Term<A1, B1>, s: Term<A2, B2>) -> Term<Sum<A1, A2>, Sum<B1, B2>>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    negation(coproduct(negation(r), negation(s)))
}

/// Relative composition, the universal dual of composition:
/// `∀c. r(a, c) ∨ s(c, b)`.
pub fn relative_comp<A, C, B>(r: Term<A, C>, s: Term<C, B>) -> Term<A, B>
where
    A: Element,
    C: Finite,
    B: Element,
{
    relative_comp_via(r, C::carrier(), s)
}

/// [`relative_comp`] with `c` ranging over an explicit carrier.
pub fn relative_comp_via<A, C, B>(r: Term<A, C>, via: Carrier<C>, s: Term<C, B>) -> Term<A, B>
where
    A: Element,
    C: Element,
    B: Element,
{
    complement(compose_via(complement(r), via, complement(s)))
}

/// The relation relating nothing.
pub fn empty<A: Element, B: Element>() -> Term<A, B> {
    complement(full())
}

/// Equality on `A`: copy, then merge.
pub fn identity<A: Finite>() -> Term<A, A> {
    compose(copy(), merge())
}

/// Equality on the elements of an explicit carrier.
pub fn identity_on<A: Element>(carrier: &Carrier<A>) -> Term<A, A> {
    compose_via(copy(), carrier.square(), merge())
}

/// `a ≠ b`.
pub fn non_identity<A: Finite>() -> Term<A, A> {
    complement(identity())
}

/// `(x, y)` is related to `a` unless `x = a = y`.
pub fn different<A: Element>() -> Term<(A, A), A> {
    negation(copy())
}

/// Right residual. For `r: A → B` and `s: C → A`, `c` is related to `b`
/// iff `∀a. r(a, b) ⇒ s(c, a)`.
pub fn lin_imp_right<A, B, C>(r: Term<A, B>, s: Term<C, A>) -> Term<C, B>
where
    A: Finite,
    B: Element,
    C: Element,
{
    lin_imp_right_via(r, A::carrier(), s)
}

/// [`lin_imp_right`] with `a` ranging over an explicit carrier.
pub fn lin_imp_right_via<A, B, C>(r: Term<A, B>, via: Carrier<A>, s: Term<C, A>) -> Term<C, B>
where
    A: Element,
    B: Element,
    C: Element,
{
    negation(compose_via(converse(r), via, negation(s)))
}

/// Left residual. For `r: A → B` and `s: B → X`, `a` is related to `x`
/// iff `∀b. r(a, b) ⇒ s(b, x)`.
pub fn lin_imp_left<A, B, X>(r: Term<A, B>, s: Term<B, X>) -> Term<A, X>
where
    A: Element,
    B: Finite,
    X: Element,
{
    lin_imp_left_via(r, B::carrier(), s)
}

/// [`lin_imp_left`] with `b` ranging over an explicit carrier.
pub fn lin_imp_left_via<A, B, X>(r: Term<A, B>, via: Carrier<B>, s: Term<B, X>) -> Term<A, X>
where
    A: Element,
    B: Element,
    X: Element,
{
    negation(compose_via(negation(s), via, converse(r)))
}
