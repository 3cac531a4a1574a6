//! Operator sugar over the term constructors.
//!
//! - `!r` is [`complement`]
//! - `r * s` is [`product`]
//! - `r + s` is [`coproduct`]
//! - `r >> s` is [`compose`] (intermediate type must be [`Finite`])
//!
//! Converse has no operator; use [`Term::converse`].

use std::ops::{Add, Mul, Not, Shr};

use crate::carrier::{Element, Finite, Sum};
use crate::term::{complement, compose, coproduct, product, Term};

impl<A: Element, B: Element> Not for Term<A, B> {
    type Output = Term<A, B>;

    fn not(self) -> Term<A, B> {
        complement(self)
    }
}

impl<A1, A2, B1, B2> Mul<Term<A2, B2>> for Term<A1, B1>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    type Output = Term<(A1, A2), (B1, B2)>;

    fn mul(self, rhs: Term<A2, B2>) -> Self::Output {
        product(self, rhs)
    }
}

impl<A1, A2, B1, B2> Add<Term<A2, B2>> for Term<A1, B1>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    type Output = Term<Sum<A1, A2>, Sum<B1, B2>>;

    fn add(self, rhs: Term<A2, B2>) -> Self::Output {
        coproduct(self, rhs)
    }
}

impl<A: Element, C: Finite, B: Element> Shr<Term<C, B>> for Term<A, C> {
    type Output = Term<A, B>;

    fn shr(self, rhs: Term<C, B>) -> Term<A, B> {
        compose(self, rhs)
    }
}
