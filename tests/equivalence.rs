extern crate lambda_nfa;

use lambda_nfa::{Automaton, Nfa, Symbol, LAMBDA};

/// Every string over `alphabet` of length `0..=max_len`.
fn strings<S: Symbol>(alphabet: &[S], max_len: usize) -> Vec<Vec<S>> {
    let mut all = vec![Vec::new()];
    let mut layer: Vec<Vec<S>> = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &layer {
            for symbol in alphabet {
                let mut word = prefix.clone();
                word.push(symbol.clone());
                next.push(word);
            }
        }
        all.extend(next.iter().cloned());
        layer = next;
    }
    all
}

fn check_equivalent<S: Symbol>(nfa: &Nfa<S>, max_len: usize) {
    let dfa = nfa.powerset_construction().unwrap();
    for symbol in dfa.graph().alphabet() {
        for (state, _) in dfa.graph().states() {
            assert_eq!(dfa.next_states(symbol, state).len(), 1);
        }
    }
    for word in strings(nfa.graph().alphabet(), max_len) {
        assert_eq!(nfa.accepts(word.iter().cloned()),
                   dfa.accepts(word.iter().cloned()),
                   "{:?} disagrees on {:?}",
                   nfa.name(),
                   word);
    }
}

#[test]
fn lambda_heavy() {
    // (ab|a)*c with lambda glue everywhere
    let nfa = Nfa::new(vec![("0", "1", LAMBDA),
                            ("1", "2", 'a'),
                            ("2", "3", 'b'),
                            ("2", "3", LAMBDA),
                            ("3", "0", LAMBDA),
                            ("0", "4", 'c'),
                            ("4", "5", LAMBDA)],
                       vec!["5"],
                       "0")
        .unwrap()
        .with_name("(ab|a)*c");
    check_equivalent(&nfa, 7);
    assert_eq!(nfa.accepts("abaabc".chars()), Ok(true));
    assert_eq!(nfa.accepts("bc".chars()), Ok(false));
}

#[test]
fn merged_states() {
    let nfa = Nfa::new(vec![("A", "B", 'a'),
                            ("B", "A", LAMBDA),
                            ("A", "B", LAMBDA),
                            ("B", "C", 'b'),
                            ("C", "A", 'a')],
                       vec!["C"],
                       "A")
        .unwrap()
        .with_name("merged");
    check_equivalent(&nfa, 7);
}

#[test]
fn lambda_triangle() {
    let nfa = Nfa::new(vec![("A", "B", LAMBDA),
                            ("B", "C", LAMBDA),
                            ("C", "A", LAMBDA),
                            ("A", "A", 'x'),
                            ("B", "D", 'y'),
                            ("D", "B", 'x')],
                       vec!["D"],
                       "C")
        .unwrap()
        .with_name("triangle");
    check_equivalent(&nfa, 7);
}

#[test]
fn third_symbol_from_the_end() {
    // the classic blow-up: the third to last symbol is a 1
    let nfa = Nfa::new(vec![("q0", "q0", '0'),
                            ("q0", "q0", '1'),
                            ("q0", "q1", '1'),
                            ("q1", "q2", '0'),
                            ("q1", "q2", '1'),
                            ("q2", "q3", '0'),
                            ("q2", "q3", '1')],
                       vec!["q3"],
                       "q0")
        .unwrap()
        .with_name("third from the end");
    check_equivalent(&nfa, 8);
    let dfa = nfa.powerset_construction().unwrap();
    // 8 reachable subsets, none of them empty
    assert_eq!(dfa.graph().len(), 8);
}

#[test]
fn string_symbols() {
    let nfa = Nfa::new(vec![("idle", "busy", "start".to_owned()),
                            ("busy", "idle", "stop".to_owned()),
                            ("busy", "done", "λ".to_owned())],
                       vec!["done"],
                       "idle")
        .unwrap()
        .with_name("tokens");
    check_equivalent(&nfa, 5);
    assert_eq!(nfa.accepts(vec!["start".to_owned()]), Ok(true));
    assert_eq!(nfa.accepts(vec!["start".to_owned(), "stop".to_owned()]), Ok(false));
}
