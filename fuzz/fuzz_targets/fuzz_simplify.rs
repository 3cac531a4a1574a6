//! Fuzz the simplifier
//!
//! The input bytes drive a small stack machine that builds a relation on
//! `Fin<3>`. Simplifying it must never change which pairs it relates.

#![no_main]

use libfuzzer_sys::fuzz_target;
use relcalc::derived::{empty, identity, negation, relative_comp};
use relcalc::{compose, full, pair, simplify, Checker, Fin, Term};

type F3 = Fin<3>;

fn fin(byte: u8) -> F3 {
    Fin::new(usize::from(byte) % 3).unwrap()
}

fn build(data: &[u8]) -> Option<Term<F3, F3>> {
    // Nested compositions evaluate in time exponential in depth
    if data.len() > 24 {
        return None;
    }
    let mut stack: Vec<Term<F3, F3>> = Vec::new();
    let mut bytes = data.iter().copied();
    while let Some(op) = bytes.next() {
        match op % 10 {
            0 => stack.push(full()),
            1 => stack.push(empty()),
            2 => stack.push(identity()),
            3 => {
                let a = fin(bytes.next()?);
                let b = fin(bytes.next()?);
                stack.push(pair(a, b));
            }
            4 => {
                let t = stack.pop()?;
                stack.push(t.converse());
            }
            5 => {
                let t = stack.pop()?;
                stack.push(t.complement());
            }
            6 => {
                let t = stack.pop()?;
                stack.push(negation(t));
            }
            7 | 8 => {
                let s = stack.pop()?;
                let r = stack.pop()?;
                stack.push(compose(r, s));
            }
            _ => {
                let s = stack.pop()?;
                let r = stack.pop()?;
                stack.push(relative_comp(r, s));
            }
        }
    }
    stack.pop()
}

fuzz_target!(|data: &[u8]| {
    if let Some(term) = build(data) {
        let simplified = simplify(&term);
        assert!(simplified.size() <= term.size());
        let checker = Checker::<F3, F3>::finite();
        // 9 pairs, always within budget
        assert!(checker.equivalent(&term, &simplified).unwrap());
    }
});
