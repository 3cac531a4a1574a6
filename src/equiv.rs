//! Relation equality as mutual inclusion, decided over finite carriers.
//!
//! `r ⊆ s` holds when every pair `r` relates is also related by `s`; `r` and
//! `s` are equivalent when each includes the other. Over infinite carriers this
//! is only a mathematical relation, so every check here takes (or derives from
//! [`Finite`]) an explicit enumeration of both carriers.
//!
//! [`inclusion`] and [`equivalent`] are the plain boolean forms. [`Checker`]
//! adds a pair budget that fails fast on oversized carriers, counterexample
//! reporting, and law verification.

use crate::carrier::{pairs, Carrier, Element, Finite};
use crate::config::CheckConfig;
use crate::error::{CheckError, Result};
use crate::eval::{eval, Predicate};
use crate::laws::Law;
use crate::term::Term;

/// `r ⊆ s` over `domain × codomain`.
pub fn inclusion<A: Element, B: Element>(
    r: &Term<A, B>,
    s: &Term<A, B>,
    domain: &Carrier<A>,
    codomain: &Carrier<B>,
) -> bool {
    let (p, q) = (eval(r), eval(s));
    pairs(domain, codomain).all(|(a, b)| !p.holds(a, b) || q.holds(a, b))
}

/// `r ⊆ s ∧ s ⊆ r` over `domain × codomain`.
pub fn equivalent<A: Element, B: Element>(
    r: &Term<A, B>,
    s: &Term<A, B>,
    domain: &Carrier<A>,
    codomain: &Carrier<B>,
) -> bool {
    let (p, q) = (eval(r), eval(s));
    pairs(domain, codomain).all(|(a, b)| p.holds(a, b) == q.holds(a, b))
}

/// An equivalence relation on `T`, decided by `self`.
///
/// Implementations must be reflexive, symmetric and transitive on the values
/// they accept.
pub trait Equivalence<T> {
    type Error;

    fn equiv(&self, x: &T, y: &T) -> std::result::Result<bool, Self::Error>;
}

/// Which inclusion a violating pair breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Related by the left term but not the right
    Forward,
    /// Related by the right term but not the left
    Backward,
}

/// A pair witnessing that an inclusion fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation<A, B> {
    pub domain: A,
    pub codomain: B,
    pub direction: Direction,
}

/// Result of an inclusion or equivalence check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckResult<A, B> {
    Satisfied,
    /// At least one violation; at most `max_violations` per direction are kept
    Violated(Vec<Violation<A, B>>),
}

impl<A, B> CheckResult<A, B> {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CheckResult::Satisfied)
    }

    pub fn violations(&self) -> &[Violation<A, B>] {
        match self {
            CheckResult::Satisfied => &[],
            CheckResult::Violated(vs) => vs,
        }
    }
}

/// Decides inclusion and equivalence of `Term<A, B>`s over fixed carriers.
#[derive(Clone, Debug)]
pub struct Checker<A, B> {
    domain: Carrier<A>,
    codomain: Carrier<B>,
    config: CheckConfig,
}

impl<A: Finite, B: Finite> Checker<A, B> {
    /// Check over every value of both types.
    pub fn finite() -> Self {
        Self::new(A::carrier(), B::carrier())
    }
}

impl<A: Element, B: Element> Checker<A, B> {
    pub fn new(domain: Carrier<A>, codomain: Carrier<B>) -> Self {
        Self {
            domain,
            codomain,
            config: CheckConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn domain(&self) -> &Carrier<A> {
        &self.domain
    }

    pub fn codomain(&self) -> &Carrier<B> {
        &self.codomain
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// `|domain| * |codomain|`, saturating.
    pub fn pair_count(&self) -> usize {
        self.domain.len().saturating_mul(self.codomain.len())
    }

    fn ensure_budget(&self) -> Result<()> {
        let pairs = self.pair_count();
        if pairs > self.config.max_pairs {
            tracing::warn!(pairs, limit = self.config.max_pairs, "check refused: over pair budget");
            return Err(CheckError::BudgetExceeded {
                pairs,
                limit: self.config.max_pairs,
            });
        }
        Ok(())
    }

    /// Check `r ⊆ s`, collecting violating pairs.
    pub fn check_inclusion(&self, r: &Term<A, B>, s: &Term<A, B>) -> Result<CheckResult<A, B>> {
        self.ensure_budget()?;
        tracing::debug!(pairs = self.pair_count(), "checking inclusion");

        let violations = self.collect(&eval(r), &eval(s), Direction::Forward);
        tracing::debug!(violations = violations.len(), "inclusion checked");
        Ok(into_result(violations))
    }

    /// Check `r ⊆ s` and `s ⊆ r`, collecting violations in both directions.
    pub fn check_equivalence(&self, r: &Term<A, B>, s: &Term<A, B>) -> Result<CheckResult<A, B>> {
        self.ensure_budget()?;
        tracing::debug!(pairs = self.pair_count(), "checking equivalence");

        let (p, q) = (eval(r), eval(s));
        let mut violations = self.collect(&p, &q, Direction::Forward);
        violations.extend(self.collect(&q, &p, Direction::Backward));
        tracing::debug!(violations = violations.len(), "equivalence checked");
        Ok(into_result(violations))
    }

    /// `r ⊆ s`, stopping at the first counterexample.
    pub fn includes(&self, r: &Term<A, B>, s: &Term<A, B>) -> Result<bool> {
        self.ensure_budget()?;
        Ok(inclusion(r, s, &self.domain, &self.codomain))
    }

    /// `r ≡ s`, stopping at the first counterexample.
    pub fn equivalent(&self, r: &Term<A, B>, s: &Term<A, B>) -> Result<bool> {
        self.ensure_budget()?;
        Ok(equivalent(r, s, &self.domain, &self.codomain))
    }

    /// All pairs `r` relates, in row-major carrier order.
    pub fn extension(&self, r: &Term<A, B>) -> Result<Vec<(A, B)>> {
        self.ensure_budget()?;
        let p = eval(r);
        Ok(pairs(&self.domain, &self.codomain)
            .filter(|(a, b)| p.holds(a, b))
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect())
    }

    /// Check that both sides of a law are equivalent.
    pub fn verify(&self, law: &Law<A, B>) -> Result<CheckResult<A, B>> {
        let result = self.check_equivalence(&law.lhs, &law.rhs)?;
        if result.is_satisfied() {
            tracing::debug!(law = law.name, "law holds");
        } else {
            tracing::debug!(
                law = law.name,
                violations = result.violations().len(),
                "law violated"
            );
        }
        Ok(result)
    }

    /// Pairs where `p` holds and `q` does not, up to the violation limit.
    fn collect(
        &self,
        p: &Predicate<A, B>,
        q: &Predicate<A, B>,
        direction: Direction,
    ) -> Vec<Violation<A, B>> {
        // A limit of zero would hide failures
        let limit = self.config.max_violations.max(1);
        pairs(&self.domain, &self.codomain)
            .filter(|(a, b)| p.holds(a, b) && !q.holds(a, b))
            .take(limit)
            .map(|(a, b)| Violation {
                domain: a.clone(),
                codomain: b.clone(),
                direction,
            })
            .collect()
    }
}

fn into_result<A, B>(violations: Vec<Violation<A, B>>) -> CheckResult<A, B> {
    if violations.is_empty() {
        CheckResult::Satisfied
    } else {
        CheckResult::Violated(violations)
    }
}

impl<A: Element, B: Element> Equivalence<Term<A, B>> for Checker<A, B> {
    type Error = CheckError;

    fn equiv(&self, x: &Term<A, B>, y: &Term<A, B>) -> Result<bool> {
        self.equivalent(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::Fin;
    use crate::term::{atomic, full, pair};

    type F2 = Fin<2>;

    fn f2(i: usize) -> F2 {
        Fin::new(i).unwrap()
    }

    #[test]
    fn test_pair_included_in_full() {
        let checker = Checker::<F2, F2>::finite();
        let p = pair(f2(0), f2(1));
        let f = full();
        assert!(checker.includes(&p, &f).unwrap());
        assert!(!checker.includes(&f, &p).unwrap());
        assert!(!checker.equivalent(&p, &f).unwrap());
    }

    #[test]
    fn test_inclusion_counterexamples() {
        let checker = Checker::<F2, F2>::finite();
        let p = pair(f2(0), f2(1));
        let result = checker.check_inclusion(&full(), &p).unwrap();
        assert!(!result.is_satisfied());
        assert_eq!(result.violations().len(), 3);
        assert!(result
            .violations()
            .iter()
            .all(|v| v.direction == Direction::Forward && (v.domain, v.codomain) != (f2(0), f2(1))));
    }

    #[test]
    fn test_equivalence_reports_both_directions() {
        let checker = Checker::<F2, F2>::finite();
        let r = pair(f2(0), f2(0));
        let s = pair(f2(1), f2(1));
        let result = checker.check_equivalence(&r, &s).unwrap();
        assert_eq!(
            result.violations(),
            &[
                Violation {
                    domain: f2(0),
                    codomain: f2(0),
                    direction: Direction::Forward
                },
                Violation {
                    domain: f2(1),
                    codomain: f2(1),
                    direction: Direction::Backward
                },
            ]
        );
    }

    #[test]
    fn test_violation_limit() {
        let checker = Checker::<Fin<4>, Fin<4>>::finite()
            .with_config(CheckConfig::default().with_max_violations(2));
        let result = checker
            .check_inclusion(&full(), &atomic(|_: &Fin<4>, _: &Fin<4>| false))
            .unwrap();
        assert_eq!(result.violations().len(), 2);

        // Zero still reports the failure
        let checker = checker.with_config(CheckConfig::default().with_max_violations(0));
        let result = checker
            .check_inclusion(&full(), &atomic(|_: &Fin<4>, _: &Fin<4>| false))
            .unwrap();
        assert_eq!(result.violations().len(), 1);
    }

    #[test]
    fn test_budget_exceeded() {
        let checker = Checker::new(Carrier::new(0u32..100), Carrier::new(0u32..100))
            .with_config(CheckConfig::default().with_max_pairs(5_000));
        let r: Term<u32, u32> = full();
        let err = checker.equivalent(&r, &r).unwrap_err();
        assert_eq!(
            err,
            CheckError::BudgetExceeded {
                pairs: 10_000,
                limit: 5_000
            }
        );
        assert!(checker.extension(&r).is_err());
    }

    #[test]
    fn test_extension() {
        let checker = Checker::new(Carrier::new([0u8, 1, 2]), Carrier::new([0u8, 1, 2]));
        let lt = atomic(|a: &u8, b: &u8| a < b);
        assert_eq!(checker.extension(&lt).unwrap(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_empty_carriers_make_everything_equivalent() {
        let checker = Checker::new(Carrier::<u8>::empty(), Carrier::new([0u8]));
        let r: Term<u8, u8> = full();
        let s = r.complement();
        assert!(checker.equivalent(&r, &s).unwrap());
        assert!(checker.check_equivalence(&r, &s).unwrap().is_satisfied());
    }

    #[test]
    fn test_equivalence_trait() {
        fn same<E: Equivalence<T>, T>(e: &E, x: &T, y: &T) -> bool {
            matches!(e.equiv(x, y), Ok(true))
        }
        let checker = Checker::<F2, F2>::finite();
        let r = pair(f2(1), f2(0));
        assert!(same(&checker, &r, &r.converse().converse()));
        assert!(!same(&checker, &r, &r.converse()));
    }

    #[test]
    fn test_free_functions_agree_with_checker() {
        let dom = Carrier::new([0u8, 1]);
        let cod = Carrier::new([0u8, 1]);
        let r: Term<u8, u8> = pair(0, 1);
        assert!(inclusion(&r, &full(), &dom, &cod));
        assert!(!inclusion(&full(), &r, &dom, &cod));
        assert!(equivalent(&r, &r.converse().converse(), &dom, &cod));
    }
}
