//! Exhaustive search for expressions that make 24.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::round::ROUND_SIZE;

/// The value every solution must reach.
pub const TARGET: f64 = 24.0;

/// A partial result: its value and the expression that produced it.
#[derive(Debug, Clone)]
struct Term {
    value: f64,
    expr: String,
}

impl Term {
    fn leaf(number: u8) -> Self {
        Self {
            value: f64::from(number),
            expr: number.to_string(),
        }
    }

    fn combine(left: &Self, op: char, right: &Self, value: f64) -> Self {
        Self {
            value,
            expr: format!("({} {op} {})", left.expr, right.expr),
        }
    }
}

struct Search {
    seen: HashSet<String>,
    solutions: Vec<String>,
}

impl Search {
    fn run(&mut self, terms: &[Term]) {
        if let [last] = terms {
            #[expect(
                clippy::float_cmp,
                reason = "solutions are defined by exact equality with 24"
            )]
            let hit = last.value == TARGET;
            if hit {
                let expr = strip_outer_parens(&last.expr);
                if self.seen.insert(expr.to_string()) {
                    self.solutions.push(expr.to_string());
                }
            }
            return;
        }

        for i in 0..terms.len() {
            for j in 0..terms.len() {
                if i == j {
                    continue;
                }
                let a = &terms[i];
                let b = &terms[j];
                let rest: Vec<Term> = terms
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, term)| term.clone())
                    .collect();

                self.branch(&rest, Term::combine(a, '+', b, a.value + b.value));
                self.branch(&rest, Term::combine(a, '-', b, a.value - b.value));
                self.branch(&rest, Term::combine(b, '-', a, b.value - a.value));
                self.branch(&rest, Term::combine(a, '*', b, a.value * b.value));
                if b.value != 0.0 {
                    self.branch(&rest, Term::combine(a, '/', b, a.value / b.value));
                }
                if a.value != 0.0 {
                    self.branch(&rest, Term::combine(b, '/', a, b.value / a.value));
                }
            }
        }
    }

    fn branch(&mut self, rest: &[Term], reduced: Term) {
        let mut next = Vec::with_capacity(rest.len() + 1);
        next.extend_from_slice(rest);
        next.push(reduced);
        self.run(&next);
    }
}

/// Every combination wraps itself in parentheses; the outermost pair is noise.
fn strip_outer_parens(expr: &str) -> &str {
    expr.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(expr)
}

/// Returns every distinct expression over `numbers` that evaluates to exactly 24.
///
/// The search repeatedly takes an ordered pair of remaining values, replaces
/// it with one of `a+b`, `a-b`, `b-a`, `a*b`, `a/b` and `b/a` (skipping
/// division by zero), and keeps every path whose final value equals 24 with
/// no tolerance. Results are fully parenthesized apart from the outermost
/// operation, contain each number exactly once, and come back in a
/// deterministic order.
///
/// # Example
///
/// ```
/// use twentyfour::solve;
///
/// let solutions = solve([4, 3, 2, 1]);
/// assert!(solutions.iter().any(|s| s == "((4 * 3) * 2) * 1"));
/// ```
#[must_use]
pub fn solve(numbers: [u8; ROUND_SIZE]) -> Vec<String> {
    let terms: Vec<Term> = numbers.iter().map(|&n| Term::leaf(n)).collect();
    let mut search = Search {
        seen: HashSet::new(),
        solutions: Vec::new(),
    };
    search.run(&terms);
    search.solutions
}

/// Returns whether any expression over `numbers` evaluates to exactly 24.
#[must_use]
pub fn has_solution(numbers: [u8; ROUND_SIZE]) -> bool {
    !solve(numbers).is_empty()
}
