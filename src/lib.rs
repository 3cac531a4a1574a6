//! relcalc: a calculus of binary relations over typed carriers
//!
//! Relations are built as syntax ([`Term`]) from a closed set of constructors:
//! atoms, pairs, composition, converse, complement, the full relation,
//! product and coproduct, and the structural relations (copy, collapse,
//! projections, injections). [`eval`] gives every term its meaning as a
//! membership predicate. Derived operators (linear negation, par, with,
//! identity, residuals) are sugar over the primitives.
//!
//! Relation equality is mutual inclusion. It is decidable only over finite
//! carriers, so [`equiv`] takes explicit enumerations ([`Carrier`], or any
//! [`Finite`] type) and checks laws pointwise.
//!
//! ```
//! use relcalc::{compose, copy, equiv::Checker, derived::merge, derived::identity, Fin};
//!
//! let id = compose(copy::<Fin<3>>(), merge());
//! let checker = Checker::<Fin<3>, Fin<3>>::finite();
//! assert!(checker.equivalent(&id, &identity()).unwrap());
//! ```

pub mod carrier;
pub mod config;
pub mod derived;
pub mod equiv;
pub mod error;
pub mod eval;
pub mod laws;
mod ops;
pub mod simplify;
pub mod term;

pub use carrier::{Carrier, Element, Fin, Finite, Sum};
pub use config::CheckConfig;
pub use equiv::{equivalent, inclusion, CheckResult, Checker, Equivalence};
pub use error::{CheckError, Result};
pub use eval::{eval, Predicate};
pub use simplify::simplify;
pub use term::{
    atomic, collapse, complement, compose, compose_via, converse, copy, coproduct, first, full,
    graph, left, named, pair, product, right, second, Kind, Term,
};
