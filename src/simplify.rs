//! Term simplifier using algebraic laws.
//!
//! A single bottom-up pass: simplify children, then try the rewrites below
//! at the node. There is no cost model; every rule strictly shrinks the term.
//! Soundness is checked by proptests against the evaluator.
//!
//! Rewrites:
//! - Converse(Converse(x)) → x
//! - Converse(Pair(a, b)) → Pair(b, a)
//! - Converse(Full) → Full
//! - Complement(Complement(x)) → x
//! - Compose(x, Empty) → Empty, Compose(Empty, x) → Empty
//! - Product(x, Empty) → Empty, Product(Empty, x) → Empty
//! - Coproduct(Empty, Empty) → Empty
//!
//! Empty is `Complement(Full)`. A converse or complement node whose child did
//! not change is returned as is, so sharing in the input survives.

use crate::carrier::{Carrier, Element, Sum};
use crate::term::{complement, compose_via, converse, coproduct, full, pair, product, Node, Term};

/// Return an equivalent term, usually smaller.
pub fn simplify<A: Element, B: Element>(term: &Term<A, B>) -> Term<A, B> {
    match term.node() {
        Node::Converse(inner) => {
            let simplified = simplify(inner);
            converse_rules(&simplified).unwrap_or_else(|| {
                if simplified.ptr_eq(inner) {
                    term.clone()
                } else {
                    converse(simplified)
                }
            })
        }

        Node::Complement(inner) => {
            let simplified = simplify(inner);
            complement_rules(&simplified).unwrap_or_else(|| {
                if simplified.ptr_eq(inner) {
                    term.clone()
                } else {
                    complement(simplified)
                }
            })
        }

        Node::Compose(c) | Node::Product(c) | Node::Coproduct(c) => c.simplify(),

        _ => term.clone(),
    }
}

/// Whether `term` is syntactically `Complement(Full)`.
pub fn is_empty_syntax<A, B>(term: &Term<A, B>) -> bool {
    match term.node() {
        Node::Complement(inner) => matches!(inner.node(), Node::Full),
        _ => false,
    }
}

fn empty<A: Element, B: Element>() -> Term<A, B> {
    complement(full())
}

fn converse_rules<A: Element, B: Element>(inner: &Term<B, A>) -> Option<Term<A, B>> {
    match inner.node() {
        Node::Converse(x) => {
            tracing::trace!(rule = "double_converse", "rewrite");
            Some(x.clone())
        }
        Node::Pair(b, a) => {
            tracing::trace!(rule = "converse_pair", "rewrite");
            Some(pair(a.clone(), b.clone()))
        }
        Node::Full => {
            tracing::trace!(rule = "converse_full", "rewrite");
            Some(full())
        }
        _ => None,
    }
}

fn complement_rules<A: Element, B: Element>(inner: &Term<A, B>) -> Option<Term<A, B>> {
    match inner.node() {
        Node::Complement(x) => {
            tracing::trace!(rule = "double_complement", "rewrite");
            Some(x.clone())
        }
        _ => None,
    }
}

/// Rebuild a composition from simplified operands.
pub(crate) fn composition<A, C, B>(first: Term<A, C>, via: Carrier<C>, second: Term<C, B>) -> Term<A, B>
where
    A: Element,
    C: Element,
    B: Element,
{
    if is_empty_syntax(&first) || is_empty_syntax(&second) {
        tracing::trace!(rule = "compose_empty", "rewrite");
        return empty();
    }
    compose_via(first, via, second)
}

/// Rebuild a product from simplified operands.
pub(crate) fn product_of<A1, A2, B1, B2>(
    left: Term<A1, B1>,
    right: Term<A2, B2>,
) -> Term<(A1, A2), (B1, B2)>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    if is_empty_syntax(&left) || is_empty_syntax(&right) {
        tracing::trace!(rule = "product_empty", "rewrite");
        return empty();
    }
    product(left, right)
}

/// Rebuild a coproduct from simplified operands.
pub(crate) fn coproduct_of<A1, A2, B1, B2>(
    left: Term<A1, B1>,
    right: Term<A2, B2>,
) -> Term<Sum<A1, A2>, Sum<B1, B2>>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    if is_empty_syntax(&left) && is_empty_syntax(&right) {
        tracing::trace!(rule = "coproduct_empty", "rewrite");
        return empty();
    }
    coproduct(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::Fin;
    use crate::term::{atomic, compose, copy, Kind};

    fn lt() -> Term<Fin<3>, Fin<3>> {
        atomic(|a: &Fin<3>, b: &Fin<3>| a < b)
    }

    #[test]
    fn test_double_converse_returns_operand() {
        let r = lt();
        let s = simplify(&r.converse().converse());
        assert!(s.ptr_eq(&r));
    }

    #[test]
    fn test_double_complement_returns_operand() {
        let r = lt();
        let s = simplify(&r.complement().complement());
        assert!(s.ptr_eq(&r));
    }

    #[test]
    fn test_quadruple_converse() {
        let r = lt();
        let t = r.converse().converse().converse().converse();
        assert!(simplify(&t).ptr_eq(&r));
    }

    #[test]
    fn test_converse_pair_swaps() {
        let t: Term<u8, bool> = converse(pair(true, 3u8));
        let s = simplify(&t);
        assert_eq!(s.kind(), Kind::Pair);
        assert!(s.holds(&3, &true));
    }

    #[test]
    fn test_compose_with_empty_is_empty() {
        let r = lt();
        let t = compose(r.clone(), empty::<Fin<3>, Fin<3>>());
        assert!(is_empty_syntax(&simplify(&t)));
        let t = compose(complement(complement(empty::<Fin<3>, Fin<3>>())), r);
        assert!(is_empty_syntax(&simplify(&t)));
    }

    #[test]
    fn test_product_with_empty_is_empty() {
        let t = product(lt(), empty::<bool, bool>());
        assert!(is_empty_syntax(&simplify(&t)));
    }

    #[test]
    fn test_coproduct_needs_both_sides_empty() {
        let one_side = coproduct(lt(), empty::<bool, bool>());
        assert_eq!(simplify(&one_side).kind(), Kind::Coproduct);

        let both = coproduct(empty::<u8, u8>(), empty::<bool, bool>());
        assert!(is_empty_syntax(&simplify(&both)));
    }

    #[test]
    fn test_untouched_term_keeps_identity() {
        let r = lt();
        let t = r.complement().converse();
        assert!(simplify(&t).ptr_eq(&t));

        let c = copy::<u8>();
        assert!(simplify(&c).ptr_eq(&c));
    }

    #[test]
    fn test_nested_rewrite_inside_compose() {
        let r = lt();
        let t = compose(r.converse().converse(), r.complement().complement());
        let s = simplify(&t);
        assert_eq!(s.kind(), Kind::Compose);
        assert_eq!(s.size(), 3);
        assert_eq!(t.size(), 7);
    }
}
