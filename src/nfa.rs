use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::automaton::Automaton;
use crate::dfa::Dfa;
use crate::error::Result;
use crate::graph::{AutomatonGraph, GraphBuilder, StateSet};
use crate::state::{StartState, State, StateRef, Transition};
use crate::symbol::Symbol;

/// A nondeterministic automaton with lambda moves.
#[derive(Clone, Debug)]
pub struct Nfa<S> {
    graph: AutomatonGraph<S>,
}

impl<S: Symbol> Nfa<S> {
    pub fn new<T, R, A, N, St>(table: T, accept_states: A, start: St) -> Result<Self>
        where T: IntoIterator<Item = R>,
              R: Into<Transition<S>>,
              A: IntoIterator<Item = N>,
              N: Into<String>,
              St: Into<StartState>
    {
        GraphBuilder::new()
            .transitions(table)
            .accept_states(accept_states)
            .start(start)
            .build()
            .map(Nfa::from_graph)
    }

    pub fn from_graph(graph: AutomatonGraph<S>) -> Self {
        Nfa { graph: graph }
    }

    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.graph.set_name(name.into());
        self
    }

    pub fn name(&self) -> &str {
        self.graph.name()
    }

    /// Subset construction. Every DFA state is an epsilon-closed set of NFA
    /// states, named by its members (`{A,B}`); the empty set `{}` is the
    /// stuck state, so the result is complete.
    pub fn powerset_construction(&self) -> Result<Dfa<S>> {
        type Subset = BTreeSet<StateRef>;

        let graph = &self.graph;
        let start: Subset = graph.closure(graph.start()).iter().collect();

        let mut subsets: Vec<Subset> = vec![start.clone()];
        let mut states_map: HashMap<Subset, StateRef> = HashMap::new();
        let mut transitions: Vec<Vec<(S, StateRef)>> = vec![Vec::new()];
        states_map.insert(start.clone(), 0);

        let mut worklist = vec![(start, 0)];
        while let Some((cur_states, cur_num)) = worklist.pop() {
            for symbol in graph.alphabet() {
                let mut nxt_states = Subset::new();
                for &state in &cur_states {
                    for target in graph.state(state).targets(symbol) {
                        nxt_states.extend(graph.closure(target).iter());
                    }
                }

                let nxt_num = match states_map.get(&nxt_states).cloned() {
                    Some(nxt_num) => nxt_num,
                    None => {
                        let nxt_num = subsets.len();
                        subsets.push(nxt_states.clone());
                        transitions.push(Vec::new());
                        states_map.insert(nxt_states.clone(), nxt_num);
                        worklist.push((nxt_states, nxt_num));
                        nxt_num
                    }
                };
                transitions[cur_num].push((symbol.clone(), nxt_num));
            }
        }

        let accept: StateSet = subsets
            .iter()
            .enumerate()
            .filter(|&(_, subset)| subset.iter().any(|&state| graph.is_accept(state)))
            .map(|(num, _)| num)
            .collect();
        let states = subsets
            .iter()
            .zip(transitions)
            .map(|(subset, transitions)| {
                State {
                    name: self.subset_name(subset),
                    transitions: transitions,
                }
            })
            .collect();

        Dfa::from_graph(AutomatonGraph::from_parts(graph.name().to_owned(),
                                                   graph.alphabet().to_vec(),
                                                   states,
                                                   0,
                                                   accept))
    }

    /// `{A,B}` for the subset of `A` and `B`. Member names are escaped so a
    /// state called `A,B` becomes `{A\,B}` and never collides.
    fn subset_name(&self, subset: &BTreeSet<StateRef>) -> String {
        let mut names: Vec<String> = subset
            .iter()
            .map(|&s| escape_member(self.graph.state(s).name()))
            .collect();
        names.sort();
        format!("{{{}}}", names.join(","))
    }

    /// Checks `input` on the converted DFA instead of searching this NFA.
    ///
    /// The converted DFA has no lambda moves, so an explicit lambda in
    /// `input` never matches here, even where `accepts` would follow it.
    pub fn accepts_as_dfa<I: IntoIterator<Item = S>>(&self, input: I) -> Result<bool> {
        self.powerset_construction()?.accepts(input)
    }
}

fn escape_member(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if let '\\' | ',' | '{' | '}' = c {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl<S: Symbol> Automaton<S> for Nfa<S> {
    #[inline]
    fn graph(&self) -> &AutomatonGraph<S> {
        &self.graph
    }

    fn next_states(&self, symbol: &S, state: StateRef) -> StateSet {
        let mut nxt_states = StateSet::with_capacity(self.graph.len());
        for member in self.graph.closure(state).iter() {
            for target in self.graph.state(member).targets(symbol) {
                nxt_states.insert(target);
            }
        }
        nxt_states
    }

    fn is_accepting(&self, state: StateRef) -> bool {
        self.graph.is_accept(state) ||
        self.graph.closure(state).iter().any(|member| self.graph.is_accept(member))
    }
}
