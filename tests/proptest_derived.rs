//! Property tests: each derived operator against its direct characterization


use generators::{arb_relation, fin};
use proptest::prelude::*;
use relcalc::derived::{
    different, empty, identity, identity_on, lin_imp_left, lin_imp_right, merge, negation,
    non_identity, par, relative_comp, split, with,
};
use relcalc::{Carrier, Checker, Fin, Finite, Sum};

type F3 = Fin<3>;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn negation_swaps_and_complements(r in arb_relation::<3, 2>()) {
        let n = negation(r.clone());
        for a in F3::all() {
            for b in Fin::<2>::all() {
                prop_assert_eq!(n.holds(&b, &a), !r.holds(&a, &b));
            }
        }
    }

    #[test]
    fn par_is_componentwise_disjunction(
        r in arb_relation::<2, 3>(),
        s in arb_relation::<3, 2>(),
    ) {
        let p = par(r.clone(), s.clone());
        let checker = Checker::<(Fin<2>, F3), (F3, Fin<2>)>::finite();
        for (x, y) in checker.extension(&p).unwrap() {
            prop_assert!(r.holds(&x.0, &y.0) || s.holds(&x.1, &y.1));
        }
        for x in <(Fin<2>, F3)>::carrier().iter() {
            for y in <(F3, Fin<2>)>::carrier().iter() {
                let expected = r.holds(&x.0, &y.0) || s.holds(&x.1, &y.1);
                prop_assert_eq!(p.holds(x, y), expected);
            }
        }
    }

    #[test]
    fn with_is_true_across_branches(
        r in arb_relation::<2, 2>(),
        s in arb_relation::<3, 3>(),
    ) {
        let w = with(r.clone(), s.clone());
        let dom = <Sum<Fin<2>, F3>>::carrier();
        for x in dom.iter() {
            for y in dom.iter() {
                let expected = match (x, y) {
                    (Sum::Inl(a), Sum::Inl(b)) => r.holds(a, b),
                    (Sum::Inr(a), Sum::Inr(b)) => s.holds(a, b),
                    _ => true,
                };
                prop_assert_eq!(w.holds(x, y), expected);
            }
        }
    }

    #[test]
    fn relative_comp_is_universal_disjunction(
        r in arb_relation::<3, 4>(),
        s in arb_relation::<4, 2>(),
    ) {
        let rc = relative_comp(r.clone(), s.clone());
        for a in F3::all() {
            for b in Fin::<2>::all() {
                let expected = Fin::<4>::all().all(|c| r.holds(&a, &c) || s.holds(&c, &b));
                prop_assert_eq!(rc.holds(&a, &b), expected, "a={:?} b={:?}", a, b);
            }
        }
    }

    #[test]
    fn right_residual_is_universal_implication(
        r in arb_relation::<3, 2>(),
        s in arb_relation::<4, 3>(),
    ) {
        let imp = lin_imp_right(r.clone(), s.clone());
        for c in Fin::<4>::all() {
            for b in Fin::<2>::all() {
                let expected = F3::all().all(|a| !r.holds(&a, &b) || s.holds(&c, &a));
                prop_assert_eq!(imp.holds(&c, &b), expected);
            }
        }
    }

    #[test]
    fn left_residual_is_universal_implication(
        r in arb_relation::<2, 3>(),
        s in arb_relation::<3, 4>(),
    ) {
        let imp = lin_imp_left(r.clone(), s.clone());
        for a in Fin::<2>::all() {
            for x in Fin::<4>::all() {
                let expected = F3::all().all(|b| !r.holds(&a, &b) || s.holds(&b, &x));
                prop_assert_eq!(imp.holds(&a, &x), expected);
            }
        }
    }

    #[test]
    fn empty_is_below_everything(r in arb_relation::<3, 3>()) {
        let checker = Checker::<F3, F3>::finite();
        prop_assert!(checker.includes(&empty(), &r).unwrap());
        prop_assert!(checker.includes(&r, &relcalc::full()).unwrap());
    }

    #[test]
    fn identity_is_a_unit_for_composition(r in arb_relation::<3, 4>()) {
        let checker = Checker::<F3, Fin<4>>::finite();
        let left = relcalc::compose(identity::<F3>(), r.clone());
        let right = relcalc::compose(r.clone(), identity::<Fin<4>>());
        prop_assert!(checker.equivalent(&left, &r).unwrap());
        prop_assert!(checker.equivalent(&right, &r).unwrap());
    }
}

#[test]
fn identity_on_agrees_with_identity() {
    let checker = Checker::<F3, F3>::finite();
    let explicit = identity_on(&F3::carrier());
    assert!(checker.equivalent(&explicit, &identity()).unwrap());
    assert!(checker
        .equivalent(&non_identity(), &identity::<F3>().complement())
        .unwrap());
}

#[test]
fn identity_on_partial_carrier_drops_missing_elements() {
    let partial = Carrier::new([fin::<3>(0), fin::<3>(2)]);
    let checker = Checker::<F3, F3>::finite();
    let ext = checker.extension(&identity_on(&partial)).unwrap();
    assert_eq!(ext, vec![(fin(0), fin(0)), (fin(2), fin(2))]);
}

#[test]
fn merge_split_and_different() {
    let checker = Checker::<(F3, F3), F3>::finite();
    let ext = checker.extension(&merge()).unwrap();
    assert_eq!(ext.len(), 3);
    assert!(ext.iter().all(|((x, y), a)| x == a && y == a));

    let diff = checker.extension(&different()).unwrap();
    assert_eq!(diff.len(), 27 - 3);

    let split_ext = Checker::<F3, Sum<F3, F3>>::finite()
        .extension(&split())
        .unwrap();
    assert_eq!(split_ext.len(), 6);
}
