//! Relation terms.
//!
//! A `Term<A, B>` is a syntactic relation between a domain `A` and a codomain
//! `B`. Constructors fix the type indices: `product` of `Term<A1, B1>` and
//! `Term<A2, B2>` is a `Term<(A1, A2), (B1, B2)>`, `copy::<A>()` is a
//! `Term<A, (A, A)>`, and so on. An ill-shaped term is a compile error.
//!
//! Terms are immutable trees of `Arc`-shared nodes. Cloning is O(1), so a
//! subterm can appear in many larger terms without being copied.
//!
//! Variants whose operands have types other than `A` and `B` (composition's
//! intermediate carrier, product/coproduct components) keep those types
//! behind the `Composite` trait object. The structural variants (copy,
//! collapse, projections, injections) carry their ground semantics as a
//! function pointer instantiated by the constructor.
//!
//! `size` and `depth` walk the tree with an explicit stack. Evaluation,
//! simplification and dropping recurse once per level, so terms nested
//! hundreds of thousands deep need a thread with a larger stack.

use std::fmt;
use std::sync::Arc;

use crate::carrier::{Carrier, Element, Finite, Sum};
use crate::eval::{self, Predicate};
use crate::simplify;

/// A binary relation between `A` and `B`, as syntax.
pub struct Term<A, B> {
    node: Arc<Node<A, B>>,
}

impl<A, B> Clone for Term<A, B> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

/// The variant tag of a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Atomic,
    Pair,
    Compose,
    Converse,
    Complement,
    Full,
    Product,
    Coproduct,
    Copy,
    Collapse,
    First,
    Second,
    Left,
    Right,
}

pub(crate) enum Node<A, B> {
    Atomic(Atom<A, B>),
    Pair(A, B),
    Compose(Box<dyn Composite<A, B>>),
    Converse(Term<B, A>),
    Complement(Term<A, B>),
    Full,
    Product(Box<dyn Composite<A, B>>),
    Coproduct(Box<dyn Composite<A, B>>),
    Copy(Shape<A, B>),
    Collapse(Shape<A, B>),
    First(Shape<A, B>),
    Second(Shape<A, B>),
    Left(Shape<A, B>),
    Right(Shape<A, B>),
}

pub(crate) struct Atom<A, B> {
    pub name: Option<Arc<str>>,
    pub predicate: Predicate<A, B>,
}

/// Ground semantics of a payload-free variant at the types it was built at.
pub(crate) struct Shape<A, B> {
    pub holds: fn(&A, &B) -> bool,
}

/// A node whose operands live at types other than its own domain/codomain.
pub(crate) trait Composite<A, B>: Send + Sync {
    fn predicate(&self) -> Predicate<A, B>;
    fn simplify(&self) -> Term<A, B>;
    fn operands<'a>(&'a self, out: &mut Vec<&'a dyn Subterm>);
    fn fmt_operands(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A term with its type indices erased, for walks that cross them.
pub(crate) trait Subterm {
    fn push_operands<'a>(&'a self, out: &mut Vec<&'a dyn Subterm>);
}

impl<A, B> Subterm for Term<A, B> {
    fn push_operands<'a>(&'a self, out: &mut Vec<&'a dyn Subterm>) {
        match self.node() {
            Node::Converse(inner) => out.push(inner),
            Node::Complement(inner) => out.push(inner),
            Node::Compose(c) | Node::Product(c) | Node::Coproduct(c) => c.operands(out),
            _ => {}
        }
    }
}

struct Composition<A, C, B> {
    first: Term<A, C>,
    second: Term<C, B>,
    via: Carrier<C>,
}

impl<A: Element, C: Element, B: Element> Composite<A, B> for Composition<A, C, B> {
    fn predicate(&self) -> Predicate<A, B> {
        eval::compose(&self.first, &self.second, &self.via)
    }

    fn simplify(&self) -> Term<A, B> {
        simplify::composition(
            simplify::simplify(&self.first),
            self.via.clone(),
            simplify::simplify(&self.second),
        )
    }

    fn operands<'a>(&'a self, out: &mut Vec<&'a dyn Subterm>) {
        out.push(&self.first);
        out.push(&self.second);
    }

    fn fmt_operands(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(name)
            .field(&self.first)
            .field(&self.second)
            .finish()
    }
}

struct ProductOf<A1, A2, B1, B2> {
    left: Term<A1, B1>,
    right: Term<A2, B2>,
}

impl<A1, A2, B1, B2> Composite<(A1, A2), (B1, B2)> for ProductOf<A1, A2, B1, B2>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    fn predicate(&self) -> Predicate<(A1, A2), (B1, B2)> {
        eval::product(&self.left, &self.right)
    }

    fn simplify(&self) -> Term<(A1, A2), (B1, B2)> {
        simplify::product_of(
            simplify::simplify(&self.left),
            simplify::simplify(&self.right),
        )
    }

    fn operands<'a>(&'a self, out: &mut Vec<&'a dyn Subterm>) {
        out.push(&self.left);
        out.push(&self.right);
    }

    fn fmt_operands(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(name)
            .field(&self.left)
            .field(&self.right)
            .finish()
    }
}

struct CoproductOf<A1, A2, B1, B2> {
    left: Term<A1, B1>,
    right: Term<A2, B2>,
}

impl<A1, A2, B1, B2> Composite<Sum<A1, A2>, Sum<B1, B2>> for CoproductOf<A1, A2, B1, B2>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    fn predicate(&self) -> Predicate<Sum<A1, A2>, Sum<B1, B2>> {
        eval::coproduct(&self.left, &self.right)
    }

    fn simplify(&self) -> Term<Sum<A1, A2>, Sum<B1, B2>> {
        simplify::coproduct_of(
            simplify::simplify(&self.left),
            simplify::simplify(&self.right),
        )
    }

    fn operands<'a>(&'a self, out: &mut Vec<&'a dyn Subterm>) {
        out.push(&self.left);
        out.push(&self.right);
    }

    fn fmt_operands(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(name)
            .field(&self.left)
            .field(&self.right)
            .finish()
    }
}

impl<A, B> Term<A, B> {
    fn from_node(node: Node<A, B>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    pub(crate) fn node(&self) -> &Node<A, B> {
        &self.node
    }

    pub fn kind(&self) -> Kind {
        match self.node() {
            Node::Atomic(_) => Kind::Atomic,
            Node::Pair(..) => Kind::Pair,
            Node::Compose(_) => Kind::Compose,
            Node::Converse(_) => Kind::Converse,
            Node::Complement(_) => Kind::Complement,
            Node::Full => Kind::Full,
            Node::Product(_) => Kind::Product,
            Node::Coproduct(_) => Kind::Coproduct,
            Node::Copy(_) => Kind::Copy,
            Node::Collapse(_) => Kind::Collapse,
            Node::First(_) => Kind::First,
            Node::Second(_) => Kind::Second,
            Node::Left(_) => Kind::Left,
            Node::Right(_) => Kind::Right,
        }
    }

    /// Number of nodes, counting a shared subterm once per occurrence.
    pub fn size(&self) -> usize {
        let mut stack: Vec<&dyn Subterm> = Vec::new();
        stack.push(self);
        let mut size = 0;
        while let Some(term) = stack.pop() {
            size += 1;
            term.push_operands(&mut stack);
        }
        size
    }

    pub fn depth(&self) -> usize {
        let root: &dyn Subterm = self;
        let mut stack = vec![(root, 1)];
        let mut operands = Vec::new();
        let mut depth = 0;
        while let Some((term, level)) = stack.pop() {
            depth = depth.max(level);
            term.push_operands(&mut operands);
            stack.extend(operands.drain(..).map(|t| (t, level + 1)));
        }
        depth
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<A: Element, B: Element> Term<A, B> {
    /// Compile this term to a predicate. See [`eval::eval`].
    pub fn eval(&self) -> Predicate<A, B> {
        eval::eval(self)
    }

    /// Evaluate at a single point. Compiles the term on every call; use
    /// [`Term::eval`] once when testing many points.
    pub fn holds(&self, a: &A, b: &B) -> bool {
        self.eval().holds(a, b)
    }

    pub fn converse(&self) -> Term<B, A> {
        converse(self.clone())
    }

    pub fn complement(&self) -> Term<A, B> {
        complement(self.clone())
    }

    /// `self` followed by `next`.
    pub fn then<C: Element>(&self, next: &Term<B, C>) -> Term<A, C>
    where
        B: Finite,
    {
        compose(self.clone(), next.clone())
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Term<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Atomic(atom) => match &atom.name {
                Some(name) => write!(f, "Atomic({})", name),
                None => f.write_str("Atomic"),
            },
            Node::Pair(a, b) => f.debug_tuple("Pair").field(a).field(b).finish(),
            Node::Compose(c) => c.fmt_operands("Compose", f),
            Node::Converse(inner) => f.debug_tuple("Converse").field(inner).finish(),
            Node::Complement(inner) => f.debug_tuple("Complement").field(inner).finish(),
            Node::Full => f.write_str("Full"),
            Node::Product(c) => c.fmt_operands("Product", f),
            Node::Coproduct(c) => c.fmt_operands("Coproduct", f),
            Node::Copy(_) => f.write_str("Copy"),
            Node::Collapse(_) => f.write_str("Collapse"),
            Node::First(_) => f.write_str("First"),
            Node::Second(_) => f.write_str("Second"),
            Node::Left(_) => f.write_str("Left"),
            Node::Right(_) => f.write_str("Right"),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Inject an arbitrary predicate as a relation.
pub fn atomic<A, B, F>(f: F) -> Term<A, B>
where
    A: Element,
    B: Element,
    F: Fn(&A, &B) -> bool + Send + Sync + 'static,
{
    Term::from_node(Node::Atomic(Atom {
        name: None,
        predicate: Predicate::new(f),
    }))
}

/// Like [`atomic`], with a name shown in `Debug` output.
pub fn named<A, B, F>(name: &str, f: F) -> Term<A, B>
where
    A: Element,
    B: Element,
    F: Fn(&A, &B) -> bool + Send + Sync + 'static,
{
    Term::from_node(Node::Atomic(Atom {
        name: Some(Arc::from(name)),
        predicate: Predicate::new(f),
    }))
}

/// The graph of a function: `a` is related to `f(a)` and nothing else.
pub fn graph<A, B, F>(f: F) -> Term<A, B>
where
    A: Element,
    B: Element,
    F: Fn(&A) -> B + Send + Sync + 'static,
{
    atomic(move |a: &A, b: &B| f(a) == *b)
}

/// The relation holding only at `(a, b)`.
pub fn pair<A: Element, B: Element>(a: A, b: B) -> Term<A, B> {
    Term::from_node(Node::Pair(a, b))
}

/// Relational composition: `a` is related to `b` when some `c` of the
/// intermediate type links them.
pub fn compose<A, C, B>(first: Term<A, C>, second: Term<C, B>) -> Term<A, B>
where
    A: Element,
    C: Finite,
    B: Element,
{
    compose_via(first, C::carrier(), second)
}

/// Composition whose existential ranges over an explicit carrier.
pub fn compose_via<A, C, B>(first: Term<A, C>, via: Carrier<C>, second: Term<C, B>) -> Term<A, B>
where
    A: Element,
    C: Element,
    B: Element,
{
    Term::from_node(Node::Compose(Box::new(Composition { first, second, via })))
}

pub fn converse<A: Element, B: Element>(r: Term<B, A>) -> Term<A, B> {
    Term::from_node(Node::Converse(r))
}

pub fn complement<A: Element, B: Element>(r: Term<A, B>) -> Term<A, B> {
    Term::from_node(Node::Complement(r))
}

/// The relation relating everything to everything.
pub fn full<A: Element, B: Element>() -> Term<A, B> {
    Term::from_node(Node::Full)
}

/// Componentwise conjunction over pairs.
pub fn product<A1, A2, B1, B2>(r: Term<A1, B1>, s: Term<A2, B2>) -> Term<(A1, A2), (B1, B2)>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    Term::from_node(Node::Product(Box::new(ProductOf { left: r, right: s })))
}

/// Branchwise relation over sums; never relates across branches.
pub fn coproduct<A1, A2, B1, B2>(
    r: Term<A1, B1>,
    s: Term<A2, B2>,
) -> Term<Sum<A1, A2>, Sum<B1, B2>>
where
    A1: Element,
    A2: Element,
    B1: Element,
    B2: Element,
{
    Term::from_node(Node::Coproduct(Box::new(CoproductOf { left: r, right: s })))
}

/// The diagonal: `a` is related to `(a, a)`.
pub fn copy<A: Element>() -> Term<A, (A, A)> {
    Term::from_node(Node::Copy(Shape {
        holds: eval::diagonal::<A>,
    }))
}

/// The codiagonal: `Inl(c)` and `Inr(c)` are both related to `c`.
pub fn collapse<C: Element>() -> Term<Sum<C, C>, C> {
    Term::from_node(Node::Collapse(Shape {
        holds: eval::codiagonal::<C>,
    }))
}

pub fn first<C: Element, D: Element>() -> Term<(C, D), C> {
    Term::from_node(Node::First(Shape {
        holds: eval::project_first::<C, D>,
    }))
}

pub fn second<C: Element, D: Element>() -> Term<(C, D), D> {
    Term::from_node(Node::Second(Shape {
        holds: eval::project_second::<C, D>,
    }))
}

/// `a` is related to `Inl(a)`.
pub fn left<A: Element, D: Element>() -> Term<A, Sum<A, D>> {
    Term::from_node(Node::Left(Shape {
        holds: eval::inject_left::<A, D>,
    }))
}

/// `a` is related to `Inr(a)`.
pub fn right<A: Element, D: Element>() -> Term<A, Sum<D, A>> {
    Term::from_node(Node::Right(Shape {
        holds: eval::inject_right::<A, D>,
    }))
}
