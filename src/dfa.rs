use crate::automaton::Automaton;
use crate::error::{AutomatonError, DeterminismViolation, Result};
use crate::graph::{AutomatonGraph, GraphBuilder, StateSet};
use crate::state::{StartState, StateRef, Transition};
use crate::symbol::Symbol;

/// A deterministic automaton: every state has exactly one transition per
/// alphabet symbol and no lambda transitions.
#[derive(Clone, Debug)]
pub struct Dfa<S> {
    graph: AutomatonGraph<S>,
}

impl<S: Symbol> Dfa<S> {
    pub fn new<T, R, A, N, St>(table: T, accept_states: A, start: St) -> Result<Self>
        where T: IntoIterator<Item = R>,
              R: Into<Transition<S>>,
              A: IntoIterator<Item = N>,
              N: Into<String>,
              St: Into<StartState>
    {
        let graph = GraphBuilder::new()
            .transitions(table)
            .accept_states(accept_states)
            .start(start)
            .build()?;
        Dfa::from_graph(graph)
    }

    pub fn from_graph(graph: AutomatonGraph<S>) -> Result<Self> {
        validate_determinism(&graph)?;
        Ok(Dfa { graph: graph })
    }

    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.graph.set_name(name.into());
        self
    }

    pub fn name(&self) -> &str {
        self.graph.name()
    }

    /// The single successor of `state` on `symbol`, if any.
    #[inline]
    pub fn step(&self, symbol: &S, state: StateRef) -> Option<StateRef> {
        self.graph.state(state).targets(symbol).next()
    }
}

impl<S: Symbol> Automaton<S> for Dfa<S> {
    #[inline]
    fn graph(&self) -> &AutomatonGraph<S> {
        &self.graph
    }

    fn next_states(&self, symbol: &S, state: StateRef) -> StateSet {
        self.graph.state(state).targets(symbol).collect()
    }

    #[inline]
    fn is_accepting(&self, state: StateRef) -> bool {
        self.graph.is_accept(state)
    }
}

fn validate_determinism<S: Symbol>(graph: &AutomatonGraph<S>) -> Result<()> {
    let fail = |state: StateRef, violation| {
        Err(AutomatonError::DeterminismValidationFailed {
            state: graph.state(state).name().to_owned(),
            violation: violation,
        })
    };

    for (idx, state) in graph.states() {
        let mut seen: Vec<&S> = Vec::with_capacity(graph.alphabet().len());
        for (symbol, _) in state.transitions() {
            if symbol.is_lambda() {
                return fail(idx, DeterminismViolation::LambdaTransition);
            }
            if !graph.in_alphabet(symbol) {
                return fail(idx, DeterminismViolation::UnexpectedSymbol(symbol.to_string()));
            }
            if seen.contains(&symbol) {
                return fail(idx, DeterminismViolation::DuplicateSymbol(symbol.to_string()));
            }
            seen.push(symbol);
        }
        if let Some(missing) = graph.alphabet().iter().find(|symbol| !seen.contains(symbol)) {
            return fail(idx, DeterminismViolation::MissingSymbol(missing.to_string()));
        }
    }
    Ok(())
}
