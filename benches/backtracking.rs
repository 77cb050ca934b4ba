#![feature(test)]

extern crate test;
extern crate lambda_nfa;

use std::iter;

use lambda_nfa::{Nfa, LAMBDA};

fn haystack_same(letter: char, len: usize) -> String {
    iter::repeat(letter).take(len).collect()
}

// (a|aa)*b: exponentially many ways to split a run of a's, none of which match
// without the trailing b.
fn ambiguous() -> Nfa<char> {
    Nfa::new(vec![("0", "1", 'a'),
                  ("0", "2", 'a'),
                  ("2", "1", 'a'),
                  ("1", "0", LAMBDA),
                  ("0", "3", 'b')],
             vec!["3"],
             "0")
        .unwrap()
}

// a*b with the loop spread over lambda moves
fn linear() -> Nfa<char> {
    Nfa::new(vec![("0", "1", LAMBDA),
                  ("1", "2", 'a'),
                  ("2", "0", LAMBDA),
                  ("0", "3", 'b')],
             vec!["3"],
             "0")
        .unwrap()
}

macro_rules! acceptance_benches {
    ($prefix:ident, $build:expr, $len:expr) => {
        mod $prefix {
            #![allow(unused_imports)]
            use super::{ambiguous, haystack_same, linear};
            use lambda_nfa::Automaton;

            use test::Bencher;

            #[bench]
            fn nfa_match(b: &mut Bencher) {
                let nfa = $build();
                let mut input = haystack_same('a', $len);
                input.push('b');
                b.bytes = input.len() as u64;
                b.iter(|| assert_eq!(nfa.accepts(input.chars()), Ok(true)));
            }

            #[bench]
            fn nfa_no_match(b: &mut Bencher) {
                let nfa = $build();
                let input = haystack_same('a', $len);
                b.bytes = input.len() as u64;
                b.iter(|| assert_eq!(nfa.accepts(input.chars()), Ok(false)));
            }

            #[bench]
            fn dfa_no_match(b: &mut Bencher) {
                let dfa = $build().powerset_construction().unwrap();
                let input = haystack_same('a', $len);
                b.bytes = input.len() as u64;
                b.iter(|| assert_eq!(dfa.accepts(input.chars()), Ok(false)));
            }

            #[bench]
            fn powerset_construction(b: &mut Bencher) {
                let nfa = $build();
                b.iter(|| nfa.powerset_construction().unwrap());
            }
        }
    }
}

acceptance_benches!(linear_long, linear, 10_000);
acceptance_benches!(ambiguous_short, ambiguous, 20);
