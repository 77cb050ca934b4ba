use std::collections::HashMap;
use std::mem;

use bit_set::BitSet;
use bit_vec::BitVec;
use tracing::warn;

use crate::error::{AutomatonError, Result};
use crate::state::{StartState, State, StateRef, Transition};
use crate::symbol::Symbol;

/// A set of states of one graph.
pub type StateSet = BitSet;

const DEFAULT_NAME: &str = "unnamed automaton";

/// The state arena shared by NFAs and DFAs.
///
/// States are inferred from the transition table; after construction the
/// graph never changes.
#[derive(Clone, Debug)]
pub struct AutomatonGraph<S> {
    name: String,
    alphabet: Vec<S>,
    states: Vec<State<S>>,
    by_name: HashMap<String, StateRef>,
    start: StateRef,
    accept: StateSet,
}

/// Collects the construction arguments; any of the three inputs may be left
/// out, which `build` reports as a `MissingArgument`.
#[derive(Clone, Debug)]
pub struct GraphBuilder<S> {
    name: Option<String>,
    transitions: Option<Vec<Transition<S>>>,
    accept_states: Option<Vec<String>>,
    start: Option<StartState>,
}

impl<S: Symbol> GraphBuilder<S> {
    pub fn new() -> Self {
        GraphBuilder {
            name: None,
            transitions: None,
            accept_states: None,
            start: None,
        }
    }

    pub fn name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn transitions<T, R>(mut self, table: T) -> Self
        where T: IntoIterator<Item = R>,
              R: Into<Transition<S>>
    {
        self.transitions = Some(table.into_iter().map(Into::into).collect());
        self
    }

    pub fn accept_states<A, N>(mut self, names: A) -> Self
        where A: IntoIterator<Item = N>,
              N: Into<String>
    {
        self.accept_states = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn start<T: Into<StartState>>(mut self, start: T) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn build(self) -> Result<AutomatonGraph<S>> {
        let transitions = self.transitions
            .ok_or(AutomatonError::MissingArgument("transition table"))?;
        let accept_states = self.accept_states
            .ok_or(AutomatonError::MissingArgument("accept states"))?;
        let start = self.start.ok_or(AutomatonError::MissingArgument("start state"))?;
        let mut graph = AutomatonGraph::from_table(transitions, &accept_states, start)?;
        if let Some(name) = self.name {
            graph.name = name;
        }
        Ok(graph)
    }
}

impl<S: Symbol> Default for GraphBuilder<S> {
    fn default() -> Self {
        GraphBuilder::new()
    }
}

impl<S: Symbol> AutomatonGraph<S> {
    pub fn builder() -> GraphBuilder<S> {
        GraphBuilder::new()
    }

    fn from_table(table: Vec<Transition<S>>,
                  accept_states: &[String],
                  start: StartState)
                  -> Result<Self> {
        let start_name = start.resolve()?;

        let mut alphabet: Vec<S> = Vec::new();
        for row in &table {
            if !row.symbol.is_lambda() && !alphabet.contains(&row.symbol) {
                alphabet.push(row.symbol.clone());
            }
        }

        let mut graph = AutomatonGraph {
            name: DEFAULT_NAME.to_owned(),
            alphabet: alphabet,
            states: Vec::new(),
            by_name: HashMap::new(),
            start: 0,
            accept: StateSet::new(),
        };

        for row in &table {
            graph.intern(&row.start);
            graph.intern(&row.end);
        }

        for row in table {
            let from = graph.by_name[&row.start];
            let to = graph.by_name[&row.end];
            graph.add_transition(from, row.symbol, to);
        }

        graph.start = *graph.by_name.get(&start_name).ok_or_else(|| {
            AutomatonError::InvalidStartState(format!("no state named `{}`", start_name))
        })?;
        graph.accept = accept_states
            .iter()
            .filter_map(|name| graph.by_name.get(name).cloned())
            .collect();

        graph.simplify();
        Ok(graph)
    }

    /// Assembles a graph from already resolved parts, e.g. the output of a
    /// conversion. Nothing is simplified.
    pub(crate) fn from_parts(name: String,
                             alphabet: Vec<S>,
                             states: Vec<State<S>>,
                             start: StateRef,
                             accept: StateSet)
                             -> Self {
        let by_name = states
            .iter()
            .enumerate()
            .map(|(idx, state)| (state.name.clone(), idx))
            .collect();
        AutomatonGraph {
            name: name,
            alphabet: alphabet,
            states: states,
            by_name: by_name,
            start: start,
            accept: accept,
        }
    }

    fn intern(&mut self, name: &str) -> StateRef {
        if let Some(&state) = self.by_name.get(name) {
            return state;
        }
        let state = self.states.len();
        self.states.push(State::new(name.to_owned()));
        self.by_name.insert(name.to_owned(), state);
        state
    }

    fn add_transition(&mut self, from: StateRef, symbol: S, to: StateRef) {
        if from == to && symbol.is_lambda() {
            warn!(state = %self.states[from].name,
                  "self referential lambda transition removed");
            return;
        }
        self.states[from].transitions.push((symbol, to));
    }

    /// One pass of lambda cleanup: strip lambda self loops, then merge every
    /// pair of states that are lambda moves from each other. Returns the number
    /// of merges. Not iterated to a fixpoint, so longer lambda cycles survive.
    pub(crate) fn simplify(&mut self) -> usize {
        for (idx, state) in self.states.iter_mut().enumerate() {
            if state.strip_lambda_loops(idx) > 0 {
                warn!(state = %state.name, "self referential lambda transition removed");
            }
        }

        let lambda = S::lambda();
        let mut live = BitVec::from_elem(self.states.len(), true);
        let mut merges = 0;

        for current in 0..self.states.len() {
            if !live[current] {
                continue;
            }
            let successors: Vec<StateRef> = self.states[current].targets(&lambda).collect();
            for next in successors {
                if next == current || !live[next] {
                    continue;
                }
                if self.states[next].has_lambda_to(current) {
                    warn!(state = %self.states[current].name,
                          merged = %self.states[next].name,
                          "mutually lambda-linked states combined");
                    self.merge(current, next);
                    live.set(next, false);
                    merges += 1;
                }
            }
        }

        if merges > 0 {
            self.compact(&live);
        }
        merges
    }

    /// Folds `absorbed` into `survivor`. The absorbed state is left empty and
    /// unreferenced; `compact` drops it.
    fn merge(&mut self, survivor: StateRef, absorbed: StateRef) {
        let moved = mem::replace(&mut self.states[absorbed].transitions, Vec::new());
        self.states[survivor].transitions.extend(moved);

        for state in self.states.iter_mut() {
            for (_, to) in state.transitions.iter_mut() {
                if *to == absorbed {
                    *to = survivor;
                }
            }
        }
        self.states[survivor].strip_lambda_loops(survivor);

        if self.start == absorbed {
            self.start = survivor;
        }
        if self.accept.remove(absorbed) {
            self.accept.insert(survivor);
        }
    }

    /// Remove dead states and renumber the rest.
    fn compact(&mut self, live: &BitVec) {
        // no edge targets a dead state after `merge`, so their slot is never read
        let mut renumber = vec![StateRef::MAX; self.states.len()];
        let mut next = 0;
        for (idx, alive) in live.iter().enumerate() {
            if alive {
                renumber[idx] = next;
                next += 1;
            }
        }

        let states = mem::replace(&mut self.states, Vec::new());
        self.states = states
            .into_iter()
            .zip(live.iter())
            .filter_map(|(state, alive)| if alive { Some(state) } else { None })
            .collect();
        for state in self.states.iter_mut() {
            for (_, to) in state.transitions.iter_mut() {
                *to = renumber[*to];
            }
        }

        self.by_name = self.states
            .iter()
            .enumerate()
            .map(|(idx, state)| (state.name.clone(), idx))
            .collect();
        self.start = renumber[self.start];
        self.accept = self.accept.iter().map(|state| renumber[state]).collect();
    }

    /// Every state reachable from `state` through lambda moves only,
    /// `state` included.
    pub fn closure(&self, state: StateRef) -> StateSet {
        let lambda = S::lambda();
        let mut closure = StateSet::with_capacity(self.states.len());
        let mut stack = vec![state];
        while let Some(current) = stack.pop() {
            if !closure.insert(current) {
                continue;
            }
            for to in self.states[current].targets(&lambda) {
                if !closure.contains(to) {
                    stack.push(to);
                }
            }
        }
        closure
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    #[inline]
    pub fn in_alphabet(&self, symbol: &S) -> bool {
        self.alphabet.contains(symbol)
    }

    pub fn start(&self) -> StateRef {
        self.start
    }

    pub fn accept_states(&self) -> &StateSet {
        &self.accept
    }

    #[inline]
    pub fn is_accept(&self, state: StateRef) -> bool {
        self.accept.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Panics if `state` is not below `len()`.
    pub fn state(&self, state: StateRef) -> &State<S> {
        &self.states[state]
    }

    pub fn states(&self) -> impl Iterator<Item = (StateRef, &State<S>)> {
        self.states.iter().enumerate()
    }

    pub fn state_by_name(&self, name: &str) -> Option<StateRef> {
        self.by_name.get(name).cloned()
    }
}
